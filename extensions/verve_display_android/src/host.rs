//! Shared JNI plumbing for reaching the host activity

use android_activity::AndroidApp;
use jni::objects::JObject;
use jni::{JNIEnv, JavaVM};
use verve_display::{DisplayError, Result};

/// Attach to the host VM and run `body` with the activity object.
///
/// A pending Java exception left behind by a failed call is cleared
/// before returning, so later JNI traffic on this thread starts clean.
pub(crate) fn with_activity<T>(
    app: &AndroidApp,
    body: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T>,
) -> Result<T> {
    let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr().cast()) }
        .map_err(|e| DisplayError::Platform(format!("Host VM unavailable: {e}")))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| DisplayError::Platform(format!("Thread attach failed: {e}")))?;
    let activity = unsafe { JObject::from_raw(app.activity_as_ptr().cast()) };

    let result = body(&mut env, &activity);
    if result.is_err() {
        let _ = env.exception_clear();
    }
    result
}

/// Map a JNI failure into the bridge's platform error.
pub(crate) fn jni_err(e: jni::errors::Error) -> DisplayError {
    DisplayError::Platform(e.to_string())
}
