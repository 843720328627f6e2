fn main() {
    // Embed the application icon into the Windows executable when one is shipped
    #[cfg(windows)]
    {
        const ICON: &str = "assets/icons/miniplayer.ico";
        if std::path::Path::new(ICON).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(ICON);
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed {ICON}: {e}");
            }
        } else {
            println!("cargo:warning={ICON} not found, skipping icon embedding");
        }
    }
}
