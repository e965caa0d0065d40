//! Android display-mode source and refresh-rate sink
//!
//! Both types reach the host activity over JNI. Failures are swallowed
//! after a log line: the source reports no modes and the sink skips the
//! write, so the bridge degrades to its floor rate instead of surfacing
//! an error to the application layer.

use verve_display::{DisplayMode, DisplayModeSource, RefreshRateSink};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;
#[cfg(target_os = "android")]
use jni::objects::{JObject, JObjectArray, JValue};
#[cfg(target_os = "android")]
use jni::JNIEnv;
#[cfg(target_os = "android")]
use verve_display::Result;

#[cfg(target_os = "android")]
use crate::host::{jni_err, with_activity};

/// Mode source backed by `Activity.getDisplay().getSupportedModes()`.
pub struct AndroidDisplay {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

/// Rate sink backed by the window's `preferredRefreshRate` attribute.
pub struct AndroidWindow {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

#[cfg(target_os = "android")]
impl AndroidDisplay {
    /// Mode source for the given host app.
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn query_modes(&self) -> Result<Vec<DisplayMode>> {
        with_activity(&self.app, |env, activity| {
            // getDisplay() returns null until the activity is attached
            // to a display, and throws off UI contexts.
            let display = env
                .call_method(activity, "getDisplay", "()Landroid/view/Display;", &[])
                .and_then(|v| v.l())
                .map_err(jni_err)?;
            if display.as_raw().is_null() {
                return Ok(Vec::new());
            }

            let modes = env
                .call_method(
                    &display,
                    "getSupportedModes",
                    "()[Landroid/view/Display$Mode;",
                    &[],
                )
                .and_then(|v| v.l())
                .map_err(jni_err)?;
            if modes.as_raw().is_null() {
                return Ok(Vec::new());
            }

            let modes = JObjectArray::from(modes);
            let count = env.get_array_length(&modes).map_err(jni_err)?;
            let mut out = Vec::with_capacity(count as usize);
            for index in 0..count {
                let mode = env
                    .get_object_array_element(&modes, index)
                    .map_err(jni_err)?;
                let rate = env
                    .call_method(&mode, "getRefreshRate", "()F", &[])
                    .and_then(|v| v.f())
                    .map_err(jni_err)?;
                out.push(DisplayMode::new(rate));
            }
            Ok(out)
        })
    }
}

#[cfg(target_os = "android")]
impl DisplayModeSource for AndroidDisplay {
    fn supported_modes(&self) -> Vec<DisplayMode> {
        match self.query_modes() {
            Ok(modes) => modes,
            Err(e) => {
                tracing::warn!("Display mode query failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(target_os = "android")]
impl AndroidWindow {
    /// Rate sink for the given host app.
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn read_preferred(&self) -> Result<Option<f32>> {
        with_activity(&self.app, |env, activity| {
            let (_window, params) = window_attributes(env, activity)?;
            let rate = env
                .get_field(&params, "preferredRefreshRate", "F")
                .and_then(|v| v.f())
                .map_err(jni_err)?;
            // LayoutParams uses 0.0 as the "no preference" sentinel.
            Ok((rate > 0.0).then_some(rate))
        })
    }

    fn write_preferred(&self, rate: f32) -> Result<()> {
        with_activity(&self.app, |env, activity| {
            let (window, params) = window_attributes(env, activity)?;
            env.set_field(&params, "preferredRefreshRate", "F", JValue::Float(rate))
                .map_err(jni_err)?;
            // Attributes only take effect once written back to the
            // window.
            env.call_method(
                &window,
                "setAttributes",
                "(Landroid/view/WindowManager$LayoutParams;)V",
                &[JValue::Object(&params)],
            )
            .map_err(jni_err)?;
            Ok(())
        })
    }
}

#[cfg(target_os = "android")]
impl RefreshRateSink for AndroidWindow {
    fn preferred_refresh_rate(&self) -> Option<f32> {
        match self.read_preferred() {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!("Preferred-rate read failed: {}", e);
                None
            }
        }
    }

    fn set_preferred_refresh_rate(&mut self, rate: f32) {
        if let Err(e) = self.write_preferred(rate) {
            tracing::warn!("Preferred-rate write failed: {}", e);
        }
    }
}

/// Fetch the activity's window and its layout params.
#[cfg(target_os = "android")]
fn window_attributes<'a>(
    env: &mut JNIEnv<'a>,
    activity: &JObject,
) -> Result<(JObject<'a>, JObject<'a>)> {
    let window = env
        .call_method(activity, "getWindow", "()Landroid/view/Window;", &[])
        .and_then(|v| v.l())
        .map_err(jni_err)?;
    let params = env
        .call_method(
            &window,
            "getAttributes",
            "()Landroid/view/WindowManager$LayoutParams;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(jni_err)?;
    Ok((window, params))
}

// Stub implementations for non-Android builds (for cross-compilation checks)

#[cfg(not(target_os = "android"))]
impl AndroidDisplay {
    /// Placeholder source, reports no modes off-device.
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl DisplayModeSource for AndroidDisplay {
    fn supported_modes(&self) -> Vec<DisplayMode> {
        Vec::new()
    }
}

#[cfg(not(target_os = "android"))]
impl AndroidWindow {
    /// Placeholder sink, ignores writes off-device.
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl RefreshRateSink for AndroidWindow {
    fn preferred_refresh_rate(&self) -> Option<f32> {
        None
    }

    fn set_preferred_refresh_rate(&mut self, _rate: f32) {
        tracing::warn!("Refresh-rate control is only available on Android");
    }
}
