//! Guest heap.
//!
//! A fixed static region behind `linked_list_allocator`. The heap exists for
//! log-message formatting; the kernel itself never allocates.

#[cfg(target_arch = "riscv32")]
use linked_list_allocator::LockedHeap;

#[cfg(target_arch = "riscv32")]
const HEAP_SIZE: usize = 16 * 1024;

#[cfg(target_arch = "riscv32")]
#[global_allocator]
static ALLOCATOR: LockedHeap = LockedHeap::empty();

#[cfg(target_arch = "riscv32")]
static mut HEAP_REGION: [u8; HEAP_SIZE] = [0; HEAP_SIZE];

/// Initialize the guest heap. Must be called once, before any allocation.
#[cfg(target_arch = "riscv32")]
pub fn init() {
    unsafe {
        ALLOCATOR
            .lock()
            .init(core::ptr::addr_of_mut!(HEAP_REGION) as *mut u8, HEAP_SIZE);
    }
}

/// Host stub; host builds allocate through std.
#[cfg(not(target_arch = "riscv32"))]
pub fn init() {}
