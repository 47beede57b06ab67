//! chordlib — guitar chord diagram model and SVG rendering library.
//!
//! A chord is described by the same compact strings a web page would put
//! on a chord element: a fret pattern (`"x32010"`), finger digits
//! (`"032010"`), an optional barre fret and display names. [`render`]
//! turns that into a [`DiagramModel`] any presentation layer can draw;
//! [`render_chord_to_svg`] is the bundled SVG one.
//!
//! # Example
//! ```
//! use chordlib::{parse_chord, render};
//!
//! let spec = parse_chord(Some("x32010"), Some("032010"), None, Some("C"), None);
//! let model = render(&spec);
//! assert_eq!(model.markers.len(), 6);
//! assert_eq!(model.instructions[1].text, "place ring finger on fret 3");
//! ```

pub mod catalog;
pub mod diagram;
pub mod error;
pub mod log;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod style;

#[cfg(target_os = "android")]
pub mod android;

pub use catalog::{default_catalog, load_catalog, parse_catalog, Catalog, CatalogEntry};
pub use diagram::{collapse_barre, render};
pub use error::ChordError;
pub use model::*;
pub use parser::parse_chord;
pub use renderer::{render_chord_to_svg, render_diagram_to_svg, render_sheet_to_svg};
pub use style::{AspectPreset, StyleTokens};

/// Convert a diagram model to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn diagram_to_json(model: &DiagramModel) -> error::Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

/// Derive the diagram for a chord and return it as JSON.
pub fn render_chord_to_json(spec: &ChordSpec) -> error::Result<String> {
    diagram_to_json(&render(spec))
}

/// Render every chord of a catalog into one SVG sheet.
pub fn render_catalog_to_svg(catalog: &Catalog, style: &StyleTokens, columns: Option<usize>) -> String {
    render_sheet_to_svg(&catalog.specs(), style, columns)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow an optional UTF-8 C string. Null or invalid UTF-8 reads as absent.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string that outlives `'a`.
unsafe fn optional_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// # Safety
/// Every pointer must be null or a valid null-terminated C string.
unsafe fn spec_from_ffi(
    pattern: *const c_char,
    fingers: *const c_char,
    barre: *const c_char,
    display_name: *const c_char,
    readable_name: *const c_char,
) -> ChordSpec {
    unsafe {
        parse_chord(
            optional_str(pattern),
            optional_str(fingers),
            optional_str(barre),
            optional_str(display_name),
            optional_str(readable_name),
        )
    }
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Render a chord to SVG with default styling and return it as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// Null arguments mean the attribute is absent.
///
/// # Safety
/// Every pointer must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_svg(
    pattern: *const c_char,
    fingers: *const c_char,
    barre: *const c_char,
    display_name: *const c_char,
    readable_name: *const c_char,
) -> *mut c_char {
    let spec = unsafe { spec_from_ffi(pattern, fingers, barre, display_name, readable_name) };
    into_c_string(render_chord_to_svg(&spec, &StyleTokens::default()))
}

/// Render a chord and return its diagram model as a JSON C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// Every pointer must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(
    pattern: *const c_char,
    fingers: *const c_char,
    barre: *const c_char,
    display_name: *const c_char,
    readable_name: *const c_char,
) -> *mut c_char {
    let spec = unsafe { spec_from_ffi(pattern, fingers, barre, display_name, readable_name) };
    match render_chord_to_json(&spec) {
        Ok(json) => into_c_string(json),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
