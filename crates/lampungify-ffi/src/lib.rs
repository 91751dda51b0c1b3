// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// lampungify-ffi: C-compatible FFI layer for AksaraHandle.
//
// Memory management rules:
// - Opaque `AksaraHandle` pointer: created by `lampungify_new`, freed by
//   `lampungify_free`.
// - Returned strings: caller must free with `lampungify_free_str`.
// - Returned string arrays: caller must free with `lampungify_free_str_array`.
// - `lampungify_version` returns a static string that must not be freed.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;
use std::sync::LazyLock;

use lampungify_aksara::{AksaraHandle, resolve_font};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new handle with the default diphthongs ("ai", "au").
#[unsafe(no_mangle)]
pub extern "C" fn lampungify_new() -> *mut AksaraHandle {
    Box::into_raw(Box::new(AksaraHandle::new()))
}

/// Free a handle created by `lampungify_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_free(handle: *mut AksaraHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Transliteration ─────────────────────────────────────────────

/// Encode Latin text as aksara marker text.
///
/// Returns a heap-allocated C string, or NULL on a NULL handle or invalid
/// UTF-8 input. Caller must free with `lampungify_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_to_aksara(
    handle: *const AksaraHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.to_aksara(text))
}

/// Decode aksara marker text back to Latin (best effort).
///
/// Returns a heap-allocated C string, or NULL on error. Caller must free with
/// `lampungify_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_to_latin(
    handle: *const AksaraHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.to_latin(text))
}

/// Split one word into syllables.
///
/// Returns a NULL-terminated array of C strings (empty for a word without
/// vowels). Caller must free with `lampungify_free_str_array`. Returns NULL
/// on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_syllabify(
    handle: *const AksaraHandle,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.syllabify(word))
}

// ── Fonts ───────────────────────────────────────────────────────

/// Resolve a font display name to its CSS class.
///
/// `name` may be NULL for the default font. Unknown names also give the
/// default. Caller must free the result with `lampungify_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_font_class(name: *const c_char) -> *mut c_char {
    str_to_c(resolve_font(cstr_to_str(name)).class)
}

// ── Option setters ──────────────────────────────────────────────

/// Replace the vowel pairs kept together as diphthongs.
///
/// `pairs` points to `count` C strings. Returns 0 on success and -1 on error;
/// on error the handle keeps its previous set and, if `error_out` is
/// non-NULL, it receives a heap-allocated message the caller must free with
/// `lampungify_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_set_vowel_pair_exceptions(
    handle: *mut AksaraHandle,
    pairs: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return -1;
    };
    if pairs.is_null() && count > 0 {
        set_error(error_out, "pairs is null");
        return -1;
    }

    let raw = if count == 0 {
        &[][..]
    } else {
        unsafe { slice::from_raw_parts(pairs, count) }
    };
    let mut strings = Vec::with_capacity(count);
    for &p in raw {
        let Some(s) = cstr_to_str(p) else {
            set_error(error_out, "pair is null or not valid UTF-8");
            return -1;
        };
        strings.push(s);
    }

    match handle.set_vowel_pair_exceptions(&strings) {
        Ok(()) => 0,
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn lampungify_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(AksaraHandle::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by lampungify functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lampungify_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // Boxed slice of i strings plus the terminator
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
