// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// lettergreep-ffi: C-compatible FFI layer for LettergreepHandle.
//
// Memory management rules:
// - Opaque `LettergreepHandle` pointer: created by `lettergreep_new`, freed by
//   `lettergreep_free`.
// - Returned strings: caller must free with `lettergreep_free_str`.
// - Returned string arrays: caller must free with `lettergreep_free_str_array`.
// - Error strings written to `error_out`: caller must free with
//   `lettergreep_free_str`.
// - Words are passed as pointer + length and need not be NUL-terminated;
//   invalid UTF-8 is reported through `error_out`.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use lettergreep_nl::{LettergreepHandle, StressPolicy};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new handle.
///
/// - `config_toml`: NUL-terminated TOML configuration, or NULL for the Dutch
///   reference configuration.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `lettergreep_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_new(
    config_toml: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut LettergreepHandle {
    let result = if config_toml.is_null() {
        LettergreepHandle::dutch()
    } else {
        let Some(toml) = cstr_to_str(config_toml) else {
            set_error(error_out, "configuration is not valid UTF-8");
            return ptr::null_mut();
        };
        LettergreepHandle::from_toml_str(toml)
    };

    match result {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a handle created by `lettergreep_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_free(handle: *mut LettergreepHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Syllabification ─────────────────────────────────────────────

/// Split a word into syllables.
///
/// `data` + `len` hold the UTF-8 word (`data` may be NULL when `len` is 0).
/// Returns a NULL-terminated array of syllable strings; an empty word gives
/// an array holding only the terminator. Caller must free with
/// `lettergreep_free_str_array`. Returns NULL on error, with a message in
/// `error_out` if it is non-NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_syllabify(
    handle: *const LettergreepHandle,
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(bytes) = (unsafe { input_bytes(data, len) }) else {
        set_error(error_out, "input is null");
        return ptr::null_mut();
    };
    match handle.syllabify_bytes(bytes) {
        Ok(word) => strings_to_c_array(&lettergreep_nl::format::syllable_strings(&word)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Syllabify a word and join the syllables with the configured separator.
///
/// Returns a heap-allocated C string. Caller must free with
/// `lettergreep_free_str`. Returns NULL on error, with a message in
/// `error_out` if it is non-NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_format(
    handle: *const LettergreepHandle,
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(bytes) = (unsafe { input_bytes(data, len) }) else {
        set_error(error_out, "input is null");
        return ptr::null_mut();
    };
    match handle.syllabify_bytes(bytes) {
        Ok(word) => str_to_c(&lettergreep_nl::format::join_syllables(
            &word,
            &handle.config().separator,
        )),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Count the syllables of a word. Returns -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_syllable_count(
    handle: *const LettergreepHandle,
    data: *const u8,
    len: usize,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(bytes) = (unsafe { input_bytes(data, len) }) else {
        return -1;
    };
    match handle.syllabify_bytes(bytes) {
        Ok(word) => c_int::try_from(word.len()).unwrap_or(c_int::MAX),
        Err(_) => -1,
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Set the separator used by `lettergreep_format`. Returns 0 on success,
/// -1 if the handle is NULL or the separator is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_set_separator(
    handle: *mut LettergreepHandle,
    separator: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let Some(separator) = cstr_to_str(separator) else {
        return -1;
    };
    handle.set_separator(separator);
    0
}

/// Keep stress marks on the syllables they precede (non-zero) or strip them (0).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_set_retain_stress(
    handle: *mut LettergreepHandle,
    value: c_int,
) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_stress_policy(if value != 0 {
            StressPolicy::RetainLeading
        } else {
            StressPolicy::Strip
        });
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn lettergreep_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> = std::sync::LazyLock::new(|| {
        CString::new(LettergreepHandle::get_version()).unwrap_or_default()
    });
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by lettergreep functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lettergreep_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

/// View `len` bytes at `data`. NULL is only accepted for an empty input.
unsafe fn input_bytes<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(unsafe { slice::from_raw_parts(data, len) })
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

// Interior NUL bytes cannot cross the C boundary; such strings come back empty.
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
    ptrs.push(ptr::null_mut());
    // Exact-size allocation; rebuilt from the terminator position on free.
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
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect a NULL-terminated array into owned strings, then free it.
    fn take_array(arr: *mut *mut c_char) -> Vec<String> {
        assert!(!arr.is_null());
        let mut out = Vec::new();
        let mut i = 0;
        loop {
            let p = unsafe { *arr.add(i) };
            if p.is_null() {
                break;
            }
            out.push(unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string());
            i += 1;
        }
        unsafe { lettergreep_free_str_array(arr) };
        out
    }

    fn take_str(s: *mut c_char) -> String {
        assert!(!s.is_null());
        let out = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
        unsafe { lettergreep_free_str(s) };
        out
    }

    fn dutch() -> *mut LettergreepHandle {
        let handle = unsafe { lettergreep_new(ptr::null(), ptr::null_mut()) };
        assert!(!handle.is_null());
        handle
    }

    // -- Lifecycle --

    #[test]
    fn new_with_toml_config() {
        let toml = CString::new("separator = \".\"").unwrap();
        let handle = unsafe { lettergreep_new(toml.as_ptr(), ptr::null_mut()) };
        assert!(!handle.is_null());
        let word = "mˈɑŋkə";
        let out = unsafe { lettergreep_format(handle, word.as_ptr(), word.len(), ptr::null_mut()) };
        assert_eq!(take_str(out), "mɑŋ.kə");
        unsafe { lettergreep_free(handle) };
    }

    #[test]
    fn new_reports_config_error() {
        let toml = CString::new("onset_cluster_table = [[\"st\"]]").unwrap();
        let mut err: *mut c_char = ptr::null_mut();
        let handle = unsafe { lettergreep_new(toml.as_ptr(), &mut err) };
        assert!(handle.is_null());
        assert!(take_str(err).contains("\"st\""));
    }

    #[test]
    fn free_null_is_noop() {
        unsafe {
            lettergreep_free(ptr::null_mut());
            lettergreep_free_str(ptr::null_mut());
            lettergreep_free_str_array(ptr::null_mut());
        }
    }

    // -- Syllabification --

    #[test]
    fn syllabify_returns_array() {
        let handle = dutch();
        let word = "ˌeːlɛktrˈoːnis";
        let arr =
            unsafe { lettergreep_syllabify(handle, word.as_ptr(), word.len(), ptr::null_mut()) };
        assert_eq!(take_array(arr), vec!["eː", "lɛk", "troː", "nis"]);
        unsafe { lettergreep_free(handle) };
    }

    #[test]
    fn syllabify_empty_input() {
        let handle = dutch();
        let arr = unsafe { lettergreep_syllabify(handle, ptr::null(), 0, ptr::null_mut()) };
        assert!(take_array(arr).is_empty());
        assert_eq!(unsafe { lettergreep_syllable_count(handle, ptr::null(), 0) }, 0);
        unsafe { lettergreep_free(handle) };
    }

    #[test]
    fn syllabify_rejects_invalid_utf8() {
        let handle = dutch();
        let bytes = [b'm', 0xFF, b'a'];
        let mut err: *mut c_char = ptr::null_mut();
        let arr = unsafe { lettergreep_syllabify(handle, bytes.as_ptr(), bytes.len(), &mut err) };
        assert!(arr.is_null());
        assert!(take_str(err).contains("UTF-8"));
        assert_eq!(
            unsafe { lettergreep_syllable_count(handle, bytes.as_ptr(), bytes.len()) },
            -1
        );
        unsafe { lettergreep_free(handle) };
    }

    #[test]
    fn null_handle_is_an_error() {
        let word = "a";
        let mut err: *mut c_char = ptr::null_mut();
        let arr =
            unsafe { lettergreep_syllabify(ptr::null(), word.as_ptr(), word.len(), &mut err) };
        assert!(arr.is_null());
        assert_eq!(take_str(err), "handle is null");
        assert_eq!(
            unsafe { lettergreep_syllable_count(ptr::null(), word.as_ptr(), word.len()) },
            -1
        );
    }

    #[test]
    fn syllable_count() {
        let handle = dutch();
        let word = "ˌɪɾritˈɑntə";
        assert_eq!(
            unsafe { lettergreep_syllable_count(handle, word.as_ptr(), word.len()) },
            4
        );
        unsafe { lettergreep_free(handle) };
    }

    // -- Options --

    #[test]
    fn separator_and_stress_setters() {
        let handle = dutch();
        let sep = CString::new("|").unwrap();
        assert_eq!(unsafe { lettergreep_set_separator(handle, sep.as_ptr()) }, 0);
        assert_eq!(unsafe { lettergreep_set_separator(handle, ptr::null()) }, -1);
        unsafe { lettergreep_set_retain_stress(handle, 1) };

        let word = "mˈɑŋkə";
        let out = unsafe { lettergreep_format(handle, word.as_ptr(), word.len(), ptr::null_mut()) };
        assert_eq!(take_str(out), "ˈmɑŋ|kə");

        unsafe { lettergreep_set_retain_stress(handle, 0) };
        let out = unsafe { lettergreep_format(handle, word.as_ptr(), word.len(), ptr::null_mut()) };
        assert_eq!(take_str(out), "mɑŋ|kə");
        unsafe { lettergreep_free(handle) };
    }

    #[test]
    fn version_is_static() {
        let v = unsafe { CStr::from_ptr(lettergreep_version()) };
        assert_eq!(v.to_str().unwrap(), LettergreepHandle::get_version());
    }
}
