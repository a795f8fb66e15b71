//! Integration tests for the C ABI binding surface.
//!
//! Drives the exported `agentid_*` functions the way a C host would:
//! construct, read, observe failures through codes and messages, free.

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::thread;

use agentid::python::PyAgent;
use agentid::{
    agentid_create, agentid_free, agentid_free_string, agentid_get_id, agentid_is_valid,
    AGENTID_ERR_EMPTY_IDENTIFIER, AGENTID_ERR_INVALID_UTF8, AGENTID_OK,
};

/// Read a library-owned string, then free it.
unsafe fn take_string(ptr: *mut c_char) -> String {
    let s = CStr::from_ptr(ptr).to_str().unwrap().to_owned();
    agentid_free_string(ptr);
    s
}

/// Create a handle through the C ABI, returning the code, handle, and message.
fn create(candidate: &str) -> (i32, *const c_void, Option<String>) {
    let c = CString::new(candidate).unwrap();
    let mut handle: *const c_void = std::ptr::null();
    let mut err: *mut c_char = std::ptr::null_mut();
    let rc = unsafe { agentid_create(c.as_ptr(), &mut handle, &mut err) };
    let msg = if err.is_null() {
        None
    } else {
        Some(unsafe { take_string(err) })
    };
    (rc, handle, msg)
}

fn read_id(handle: *const c_void) -> String {
    let mut out: *mut c_char = std::ptr::null_mut();
    let rc = unsafe { agentid_get_id(handle, &mut out) };
    assert_eq!(rc, AGENTID_OK);
    unsafe { take_string(out) }
}

#[test]
fn binding_create_read_free() {
    let (rc, handle, msg) = create("demo-agent-123");
    assert_eq!(rc, AGENTID_OK);
    assert!(msg.is_none());
    assert_eq!(read_id(handle), "demo-agent-123");
    unsafe { agentid_free(handle) };
}

#[test]
fn binding_empty_candidate_yields_no_handle() {
    let (rc, handle, msg) = create("");
    assert_eq!(rc, AGENTID_ERR_EMPTY_IDENTIFIER);
    assert!(handle.is_null());
    assert_eq!(msg.as_deref(), Some("agent identifier must not be empty"));
}

#[test]
fn binding_read_is_idempotent() {
    let (_, handle, _) = create("repeat");
    for _ in 0..100 {
        assert_eq!(read_id(handle), "repeat");
    }
    unsafe { agentid_free(handle) };
}

#[test]
fn binding_same_candidate_two_handles() {
    let (_, a, _) = create("twin");
    let (_, b, _) = create("twin");
    assert_ne!(a, b, "each create returns an independent handle");
    unsafe { agentid_free(a) };
    assert_eq!(read_id(b), "twin");
    unsafe { agentid_free(b) };
}

#[test]
fn binding_is_valid_delegates_to_core() {
    for (candidate, expected) in [("a", 1), ("", 0), (" ", 1)] {
        let c = CString::new(candidate).unwrap();
        let mut v: libc::c_int = -1;
        let rc = unsafe { agentid_is_valid(c.as_ptr(), &mut v) };
        assert_eq!(rc, AGENTID_OK);
        assert_eq!(v, expected, "candidate {candidate:?}");
    }
}

#[test]
fn binding_handle_read_concurrently() {
    let (_, handle, _) = create("shared-handle");
    // Raw pointers are !Send; pass the address across threads.
    let addr = handle as usize;

    let readers: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                for _ in 0..200 {
                    assert_eq!(read_id(addr as *const c_void), "shared-handle");
                }
            })
        })
        .collect();

    for r in readers {
        r.join().expect("reader thread panicked");
    }
    unsafe { agentid_free(handle) };
}

#[test]
fn binding_python_handle_matches_c_handle() {
    let py = PyAgent::create("cross-host").unwrap();
    let (_, handle, _) = create("cross-host");
    assert_eq!(py.id(), read_id(handle));
    unsafe { agentid_free(handle) };

    let err = PyAgent::create("").unwrap_err();
    let (_, _, msg) = create("");
    assert_eq!(Some(err.to_string()), msg);
}

#[test]
fn binding_invalid_utf8_reports_message() {
    let bytes: &[u8] = b"agent-\xff\0";
    let mut handle: *const c_void = std::ptr::null();
    let mut err: *mut c_char = std::ptr::null_mut();
    let rc = unsafe { agentid_create(bytes.as_ptr() as *const c_char, &mut handle, &mut err) };

    assert_eq!(rc, AGENTID_ERR_INVALID_UTF8);
    assert!(handle.is_null());
    assert!(!err.is_null(), "a C host must receive a message with the code");
    assert_eq!(unsafe { take_string(err) }, "candidate is not valid UTF-8");
}
