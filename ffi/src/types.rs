//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointer + length instead of `Vec`,
//! and enums with explicit discriminants. Conversion functions live here to
//! keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use random_org_core::{ErrorKind, HttpRequest, RandomError, RandomOrgClient};

/// Opaque handle to a `RandomOrgClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiRandomClient {
    pub(crate) inner: RandomOrgClient,
}

/// Convert a Rust string into an owned C string. Interior NUL bytes are
/// dropped rather than failing the whole call.
pub(crate) fn to_c_string(s: impl Into<String>) -> *mut c_char {
    let mut s: String = s.into();
    s.retain(|c| c != '\0');
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A key-value pair of C strings (query parameter or header).
#[repr(C)]
pub struct FfiPair {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An outbound GET request described as C-compatible plain data.
///
/// Built by `random_build_request`. The C caller executes the request,
/// honoring `timeout_ms`, and passes the response back through
/// `random_parse_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
    pub full_url: *mut c_char,
    pub query: *mut FfiPair,
    pub query_len: u32,
    pub headers: *mut FfiPair,
    pub headers_len: u32,
    pub timeout_ms: u64,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let full_url = to_c_string(req.full_url());
        let (query, query_len) = pairs_to_raw(req.query);
        let (headers, headers_len) = pairs_to_raw(req.headers);
        let ffi_req = Box::new(FfiHttpRequest {
            url: to_c_string(req.url),
            full_url,
            query,
            query_len,
            headers,
            headers_len,
            timeout_ms: req.timeout.as_millis() as u64,
        });
        Box::into_raw(ffi_req)
    }
}

fn pairs_to_raw(pairs: Vec<(String, String)>) -> (*mut FfiPair, u32) {
    if pairs.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let ffi_pairs: Box<[FfiPair]> = pairs
        .into_iter()
        .map(|(k, v)| FfiPair {
            key: to_c_string(k),
            value: to_c_string(v),
        })
        .collect();
    let len = ffi_pairs.len() as u32;
    (Box::into_raw(ffi_pairs) as *mut FfiPair, len)
}

/// Release an array produced by `pairs_to_raw`, including its strings.
///
/// # Safety
/// `ptr` and `len` must come from the same `pairs_to_raw` call.
pub(crate) unsafe fn free_pairs(ptr: *mut FfiPair, len: u32) {
    if ptr.is_null() || len == 0 {
        return;
    }
    let pairs = unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) };
    for pair in pairs.iter() {
        if !pair.key.is_null() {
            drop(unsafe { CString::from_raw(pair.key) });
        }
        if !pair.value.is_null() {
            drop(unsafe { CString::from_raw(pair.value) });
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing the request,
/// then passes a pointer to `random_parse_response`. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiRandomResult`. Values are stable.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidInput = 1,
    Timeout = 2,
    ServiceUnavailable = 3,
    BadRequest = 4,
    ServerError = 5,
    Connection = 6,
    Parse = 7,
    Unknown = 8,
    Panic = 9,
    NullArg = 10,
}

impl From<ErrorKind> for FfiErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => FfiErrorCode::InvalidInput,
            ErrorKind::Timeout => FfiErrorCode::Timeout,
            ErrorKind::ServiceUnavailable => FfiErrorCode::ServiceUnavailable,
            ErrorKind::BadRequest => FfiErrorCode::BadRequest,
            ErrorKind::ServerError => FfiErrorCode::ServerError,
            ErrorKind::Connection => FfiErrorCode::Connection,
            ErrorKind::Parse => FfiErrorCode::Parse,
            ErrorKind::Unknown => FfiErrorCode::Unknown,
        }
    }
}

/// Result envelope for validate, parse and generate calls.
///
/// On success `error_code` is `Ok`, `error_message` is null and `value`
/// holds the integer (0 for `random_validate`). On failure `error_code`
/// names the category, `error_message` is the human-readable message and
/// `value` is 0.
#[repr(C)]
pub struct FfiRandomResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub value: i64,
}

impl FfiRandomResult {
    fn boxed(error_code: FfiErrorCode, error_message: *mut c_char, value: i64) -> *mut Self {
        Box::into_raw(Box::new(FfiRandomResult {
            error_code,
            error_message,
            value,
        }))
    }

    pub(crate) fn ok(value: i64) -> *mut Self {
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), value)
    }

    pub(crate) fn from_result(result: Result<i64, RandomError>) -> *mut Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::from_error(err),
        }
    }

    pub(crate) fn from_error(err: RandomError) -> *mut Self {
        Self::boxed(err.kind().into(), to_c_string(err.to_string()), 0)
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::boxed(FfiErrorCode::NullArg, to_c_string(format!("null argument: {name}")), 0)
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::boxed(FfiErrorCode::Panic, to_c_string(msg), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_follow_kinds() {
        assert_eq!(FfiErrorCode::from(ErrorKind::Timeout), FfiErrorCode::Timeout);
        assert_eq!(FfiErrorCode::from(ErrorKind::Parse) as i32, 7);
        assert_eq!(FfiErrorCode::from(ErrorKind::Unknown) as i32, 8);
    }

    #[test]
    fn to_c_string_drops_nul() {
        let ptr = to_c_string("a\0b");
        let s = unsafe { CString::from_raw(ptr) };
        assert_eq!(s.to_str().unwrap(), "ab");
    }
}
