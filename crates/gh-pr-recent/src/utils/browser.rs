//! Browser utilities
//!
//! Opening URLs in the system's default browser.

/// Open a URL in the system's default browser
///
/// Uses `open` on macOS, `xdg-open` on Linux and `cmd /C start` on Windows.
pub async fn open_url(url: String) {
    #[cfg(target_os = "macos")]
    let result = tokio::process::Command::new("open").arg(&url).spawn();

    #[cfg(target_os = "windows")]
    let result = tokio::process::Command::new("cmd")
        .args(["/C", "start", &url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = tokio::process::Command::new("xdg-open").arg(&url).spawn();

    match result {
        Ok(_) => log::debug!("Opened {} in browser", url),
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
