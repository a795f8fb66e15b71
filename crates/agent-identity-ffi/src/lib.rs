//! AgentIdentity bindings.
//!
//! Provides a C-compatible API for constructing agent identities and
//! reading their identifiers, plus (behind the `python` feature) a PyO3
//! extension module. Validation happens only in the `agent-identity`
//! crate; these bindings forward the candidate unchanged and translate
//! failures into the host's error convention.
//!
#![allow(clippy::doc_overindented_list_items)]
//! # Memory contract
//!
//! - All `*mut c_char` output strings are heap-allocated via [`CString`] and
//!   **must** be freed by the caller using [`agentid_free_string`].
//! - Opaque identity handles are heap-allocated Rust `Box`es and **must** be
//!   freed using [`agentid_free`]. Handles are read-only; no function in this
//!   library mutates through them.
//! - The static string returned by [`agentid_version`] is baked into the
//!   binary; it must **not** be freed.
//!
//! # Error codes
//!
//! | Constant                         | Value | Meaning                           |
//! |----------------------------------|-------|-----------------------------------|
//! | `AGENTID_OK`                     | 0     | Success                           |
//! | `AGENTID_ERR_NULL_PTR`           | -1    | A required pointer was null       |
//! | `AGENTID_ERR_INVALID_UTF8`       | -2    | A string was not valid UTF-8      |
//! | `AGENTID_ERR_EMPTY_IDENTIFIER`   | -3    | The agent identifier was empty    |
//! | `AGENTID_ERR_ENCODING`           | -4    | An output string had an inner NUL |
//! | `AGENTID_ERR_INVALID_IDENTIFIER` | -5    | Any other validation failure      |

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;

use agent_identity::{AgentIdentity, IdentityError};

pub mod python;

// ── Error codes ───────────────────────────────────────────────────────────────

/// Success.
pub const AGENTID_OK: i32 = 0;
/// A required pointer argument was null.
pub const AGENTID_ERR_NULL_PTR: i32 = -1;
/// A string argument contained invalid UTF-8.
pub const AGENTID_ERR_INVALID_UTF8: i32 = -2;
/// The candidate agent identifier was empty.
pub const AGENTID_ERR_EMPTY_IDENTIFIER: i32 = -3;
/// An output string could not be represented as a C string.
pub const AGENTID_ERR_ENCODING: i32 = -4;
/// The candidate was rejected for a reason without a dedicated code.
pub const AGENTID_ERR_INVALID_IDENTIFIER: i32 = -5;

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a `*const c_char` to a `&str`, returning an error code on failure.
///
/// # Safety
///
/// `ptr` must either be null (handled gracefully) or point to a valid,
/// null-terminated C string that remains valid for the duration of `'a`.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, i32> {
    if ptr.is_null() {
        return Err(AGENTID_ERR_NULL_PTR);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| AGENTID_ERR_INVALID_UTF8)
}

/// Allocate a `CString` and write it into `*out`, returning an error code on
/// failure.
///
/// # Safety
///
/// `out` must be non-null.
unsafe fn write_string_out(s: String, out: *mut *mut c_char) -> i32 {
    if out.is_null() {
        return AGENTID_ERR_NULL_PTR;
    }
    match CString::new(s) {
        Ok(cs) => {
            *out = cs.into_raw();
            AGENTID_OK
        }
        Err(_) => AGENTID_ERR_ENCODING,
    }
}

/// Map an [`IdentityError`] to one of the `AGENTID_ERR_*` constants.
fn map_error(e: &IdentityError) -> i32 {
    match e {
        IdentityError::EmptyIdentifier => AGENTID_ERR_EMPTY_IDENTIFIER,
        _ => AGENTID_ERR_INVALID_IDENTIFIER,
    }
}

/// Write `message` into the optional `error_out` slot and return `code`.
///
/// # Safety
///
/// `error_out` must be null or valid for a single pointer write.
unsafe fn report(code: i32, message: String, error_out: *mut *mut c_char) -> i32 {
    log::debug!("agentid binding failed ({code}): {message}");
    if !error_out.is_null() {
        // Messages are fixed ASCII literals; encoding cannot fail.
        let _ = write_string_out(message, error_out);
    }
    code
}

/// Report `e` through the optional `error_out` slot and return its code.
///
/// # Safety
///
/// `error_out` must be null or valid for a single pointer write.
unsafe fn report_error(e: &IdentityError, error_out: *mut *mut c_char) -> i32 {
    report(map_error(e), e.to_string(), error_out)
}

/// Message for an argument-level failure detected before validation.
fn argument_message(code: i32, arg: &str) -> String {
    match code {
        AGENTID_ERR_NULL_PTR => format!("{arg} pointer is null"),
        AGENTID_ERR_INVALID_UTF8 => format!("{arg} is not valid UTF-8"),
        _ => format!("{arg} is invalid"),
    }
}

// ── Version ───────────────────────────────────────────────────────────────────

/// Return the library version string as a null-terminated C string.
///
/// The caller **must not** free this pointer.
#[no_mangle]
pub extern "C" fn agentid_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

// ── Identity handles ──────────────────────────────────────────────────────────

/// Construct an agent identity from `candidate` and return an opaque handle.
///
/// # Parameters
///
/// - `candidate`  — the agent identifier, forwarded unchanged to the core.
/// - `handle_out` — on success, receives an opaque pointer that must be
///                  released with [`agentid_free`]. Left untouched on failure.
/// - `error_out`  — optional; on any failure receives an owned,
///                  human-readable message that must be freed with
///                  [`agentid_free_string`]. Pass `NULL` to ignore.
///
/// # Returns
///
/// `AGENTID_OK` on success; one of `AGENTID_ERR_*` on failure.
///
/// # Safety
///
/// `candidate` and `handle_out` must be non-null. `error_out` may be null.
#[no_mangle]
pub unsafe extern "C" fn agentid_create(
    candidate: *const c_char,
    handle_out: *mut *const c_void,
    error_out: *mut *mut c_char, // nullable
) -> i32 {
    let candidate_str = match cstr_to_str(candidate) {
        Ok(s) => s,
        Err(code) => return report(code, argument_message(code, "candidate"), error_out),
    };

    if handle_out.is_null() {
        let code = AGENTID_ERR_NULL_PTR;
        return report(code, argument_message(code, "handle_out"), error_out);
    }

    match AgentIdentity::new(candidate_str) {
        Ok(identity) => {
            *handle_out = Box::into_raw(Box::new(identity)) as *const c_void;
            AGENTID_OK
        }
        Err(e) => report_error(&e, error_out),
    }
}

/// Retrieve a copy of the identifier held by an opaque handle.
///
/// # Parameters
///
/// - `handle` — opaque handle from [`agentid_create`].
/// - `id_out` — on success, receives an owned `*mut c_char` that the caller
///              must free with [`agentid_free_string`].
///
/// # Safety
///
/// `handle` and `id_out` must both be non-null, and `handle` must not have
/// been freed.
#[no_mangle]
pub unsafe extern "C" fn agentid_get_id(handle: *const c_void, id_out: *mut *mut c_char) -> i32 {
    if handle.is_null() {
        return AGENTID_ERR_NULL_PTR;
    }
    if id_out.is_null() {
        return AGENTID_ERR_NULL_PTR;
    }

    let identity = &*(handle as *const AgentIdentity);
    write_string_out(identity.id().to_owned(), id_out)
}

/// Check whether `candidate` would be accepted, without allocating a handle.
///
/// On success `*is_valid_out` receives `1` for a valid identifier and `0`
/// otherwise.
///
/// # Safety
///
/// `candidate` and `is_valid_out` must both be non-null.
#[no_mangle]
pub unsafe extern "C" fn agentid_is_valid(
    candidate: *const c_char,
    is_valid_out: *mut libc::c_int,
) -> i32 {
    let candidate_str = match cstr_to_str(candidate) {
        Ok(s) => s,
        Err(e) => return e,
    };

    if is_valid_out.is_null() {
        return AGENTID_ERR_NULL_PTR;
    }

    *is_valid_out = if agent_identity::validate_identifier(candidate_str).is_ok() {
        1
    } else {
        0
    };
    AGENTID_OK
}

/// Free a handle previously returned by [`agentid_create`].
///
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// `handle` must be either null or a pointer returned by [`agentid_create`]
/// that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn agentid_free(handle: *const c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut AgentIdentity));
    }
}

// ── String cleanup ────────────────────────────────────────────────────────────

/// Free a string that was allocated by this library.
///
/// All `*mut c_char` values written by functions in this crate (`id_out`,
/// `error_out`) must be freed through this function. Passing `NULL` is a
/// no-op.
///
/// # Safety
///
/// `s` must be either null or a pointer that was returned by one of the
/// `agentid_*` functions in this crate and that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn agentid_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
