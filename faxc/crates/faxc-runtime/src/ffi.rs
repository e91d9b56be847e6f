//! C ABI for natively compiled Fax programs
//!
//! LLVM-generated code cannot instantiate `Ptr<T>` or `Array<T>`, so it calls
//! these checks directly. A violation here always terminates the process:
//! unwinding cannot cross an `extern "C"` frame.

use crate::array::ArrayIndex;
use crate::error::RuntimeError;
use crate::output::{self, SEPARATOR};
use crate::violation::terminate;
use libc::{c_char, c_void};
use std::ffi::CStr;

/// Return `ptr`, or terminate with the null diagnostic
#[no_mangle]
pub extern "C" fn fax_ptr_require(ptr: *mut c_void) -> *mut c_void {
    if ptr.is_null() {
        terminate(RuntimeError::NullReference);
    }
    ptr
}

/// Return `index` as an offset into an array of `len`, or terminate
#[no_mangle]
pub extern "C" fn fax_array_check_index(index: i64, len: usize) -> usize {
    match index.to_offset() {
        Some(offset) if offset < len => offset,
        _ => terminate(RuntimeError::out_of_range(index, len)),
    }
}

/// Print a NUL-terminated string; null prints nothing
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated buffer.
#[no_mangle]
pub unsafe extern "C" fn fax_print_str(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    let text = unsafe { CStr::from_ptr(ptr) };
    output::print_item(&*text.to_string_lossy());
}

#[no_mangle]
pub extern "C" fn fax_print_int(value: i64) {
    output::print_item(&value);
}

#[no_mangle]
pub extern "C" fn fax_print_float(value: f64) {
    output::print_item(&value);
}

#[no_mangle]
pub extern "C" fn fax_print_bool(value: bool) {
    output::print_item(&value);
}

/// Emitted between items of a `println` call
#[no_mangle]
pub extern "C" fn fax_print_separator() {
    output::print_item(SEPARATOR);
}

/// Emitted after the last item of a `println` call
#[no_mangle]
pub extern "C" fn fax_print_newline() {
    output::println(&[]);
}
