//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge. A null Java
//! string means the attribute is absent.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{parse_chord, render_chord_to_json, render_chord_to_svg, ChordSpec, StyleTokens};

fn optional_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(|s| s.into())
}

fn spec_from_java(
    env: &mut JNIEnv,
    pattern: &JString,
    fingers: &JString,
    barre: &JString,
    display_name: &JString,
    readable_name: &JString,
) -> ChordSpec {
    let pattern = optional_string(env, pattern);
    let fingers = optional_string(env, fingers);
    let barre = optional_string(env, barre);
    let display_name = optional_string(env, display_name);
    let readable_name = optional_string(env, readable_name);
    parse_chord(
        pattern.as_deref(),
        fingers.as_deref(),
        barre.as_deref(),
        display_name.as_deref(),
        readable_name.as_deref(),
    )
}

fn to_java(env: &mut JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a chord to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(pattern: String?, fingers: String?, barre: String?,
///                          displayName: String?, readableName: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    pattern: JString,
    fingers: JString,
    barre: JString,
    display_name: JString,
    readable_name: JString,
) -> jstring {
    let spec = spec_from_java(&mut env, &pattern, &fingers, &barre, &display_name, &readable_name);
    let svg = render_chord_to_svg(&spec, &StyleTokens::default());
    to_java(&mut env, &svg)
}

/// Render a chord and return its diagram model as JSON.
///
/// Called from Kotlin as:
///   external fun renderJson(pattern: String?, fingers: String?, barre: String?,
///                           displayName: String?, readableName: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    pattern: JString,
    fingers: JString,
    barre: JString,
    display_name: JString,
    readable_name: JString,
) -> jstring {
    let spec = spec_from_java(&mut env, &pattern, &fingers, &barre, &display_name, &readable_name);
    match render_chord_to_json(&spec) {
        Ok(json) => to_java(&mut env, &json),
        Err(_) => std::ptr::null_mut(),
    }
}
