//! C-ABI wrapper around `random-org-core`.
//!
//! # Overview
//! Exposes the Random.org client through `extern "C"` functions so a host
//! written in any language with a C FFI can either let the library perform
//! the request (`random_generate`) or do the I/O itself between
//! `random_build_request` and `random_parse_response`.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiRandomResult` envelope conveys the value or the classified
//!   error with a stable numeric code.
//! - The C caller owns all returned pointers and must call the matching
//!   `random_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use random_org_core::{validate, ClientConfig, HttpResponse, RandomOrgClient};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client.
///
/// `endpoint` may be null, in which case the configuration comes from
/// `ClientConfig::from_env` (`RANDOM_ORG_ENDPOINT`, `RANDOM_ORG_TIMEOUT_MS`,
/// falling back to the production Random.org endpoint).
/// Returns null if `endpoint` is not valid UTF-8, if the environment holds an
/// invalid timeout, or if an internal panic occurs.
/// The caller must free the returned pointer with `random_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn random_client_new(endpoint: *const c_char) -> *mut FfiRandomClient {
    catch_unwind(|| {
        let config = if endpoint.is_null() {
            match ClientConfig::from_env() {
                Ok(config) => config,
                Err(_) => return std::ptr::null_mut(),
            }
        } else {
            match unsafe { CStr::from_ptr(endpoint) }.to_str() {
                Ok(url) => ClientConfig::default().with_endpoint(url),
                Err(_) => return std::ptr::null_mut(),
            }
        };
        let client = RandomOrgClient::with_config(config);
        Box::into_raw(Box::new(FfiRandomClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `random_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn random_client_free(client: *mut FfiRandomClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Host-does-IO
// ---------------------------------------------------------------------------

/// Validate a `(min, max)` pair without touching the network.
///
/// Returns `Ok` with `value = 0` when the range is acceptable, otherwise an
/// `InvalidInput` result carrying the validation message.
#[unsafe(no_mangle)]
pub extern "C" fn random_validate(min: f64, max: f64) -> *mut FfiRandomResult {
    catch_unwind(|| match validate(min, max) {
        Ok(_) => FfiRandomResult::ok(0),
        Err(e) => FfiRandomResult::from_error(e),
    })
    .unwrap_or_else(|_| FfiRandomResult::panic("panic in random_validate"))
}

/// Build the request for `[min, max]`.
///
/// Returns null if `client` is null or the range is invalid; call
/// `random_validate` to learn why.
/// The caller must free the returned pointer with `random_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn random_build_request(
    client: *const FfiRandomClient,
    min: f64,
    max: f64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match validate(min, max) {
            Ok(range) => FfiHttpRequest::from_core(client.inner.build_request(&range)),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_string_lossy()
            .into_owned()
    };
    HttpResponse {
        status: resp.status,
        body,
    }
}

/// Parse the response to a request built by `random_build_request`.
#[unsafe(no_mangle)]
pub extern "C" fn random_parse_response(
    client: *const FfiRandomClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRandomResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRandomResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRandomResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        FfiRandomResult::from_result(client.inner.parse_response(ffi_response_to_core(resp)))
    })
    .unwrap_or_else(|_| FfiRandomResult::panic("panic in random_parse_response"))
}

// ---------------------------------------------------------------------------
// Library-does-IO
// ---------------------------------------------------------------------------

/// Validate, perform the request, and parse the answer. Blocks until the
/// call settles or the client's timeout elapses.
#[unsafe(no_mangle)]
pub extern "C" fn random_generate(
    client: *const FfiRandomClient,
    min: f64,
    max: f64,
) -> *mut FfiRandomResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRandomResult::null_arg("client");
        }
        let client = unsafe { &*client };
        FfiRandomResult::from_result(client.inner.generate_random_number(min, max))
    })
    .unwrap_or_else(|_| FfiRandomResult::panic("panic in random_generate"))
}

/// Like `random_generate`, but returns the per-item JSON record: either
/// `{"randomNumber", "min", "max", "timestamp", "source"}` or
/// `{"error", "timestamp"}`.
///
/// Returns null only if `client` is null or on an internal panic.
/// The caller must free the returned string with `random_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn random_generate_item_json(
    client: *const FfiRandomClient,
    min: f64,
    max: f64,
) -> *mut c_char {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let outcome = client.inner.generate_item(min, max);
        match serde_json::to_string(&outcome) {
            Ok(json) => to_c_string(json),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `random_build_request`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn random_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.url.is_null() {
            drop(unsafe { CString::from_raw(req.url) });
        }
        if !req.full_url.is_null() {
            drop(unsafe { CString::from_raw(req.full_url) });
        }
        unsafe {
            free_pairs(req.query, req.query_len);
            free_pairs(req.headers, req.headers_len);
        }
    });
}

/// Free an `FfiRandomResult`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn random_free_result(result: *mut FfiRandomResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn random_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
