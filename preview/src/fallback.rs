// the offline document shown whenever no user content can be displayed
//
// fully self-contained: inline styles, no scripts, no external requests, so it
// renders identically with the network down.  the frame injects it inline
// instead of navigating anywhere.
pub const FALLBACK_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Mobile Viewer Preview</title>
    <style>
      * { margin: 0; padding: 0; box-sizing: border-box; }
      body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 20px;
      }
      .card {
        background: white;
        border-radius: 20px;
        padding: 40px;
        text-align: center;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
        max-width: 100%;
      }
      h1 { color: #2d3748; margin-bottom: 10px; font-size: 24px; }
      p { color: #718096; margin-bottom: 20px; font-size: 14px; }
      .feature { margin: 20px 0; padding: 15px; background: #f7fafc; border-radius: 10px; }
      .emoji { font-size: 40px; }
      h3 { font-size: 18px; margin: 10px 0; color: #2d3748; }
    </style>
  </head>
  <body>
    <div class="card">
      <h1>Welcome to Mobile Viewer</h1>
      <p>Enter an address above to preview any site</p>
      <div class="feature">
        <div class="emoji">📱</div>
        <h3>Device Preview</h3>
        <p>Test responsive designs on phone, tablet and desktop frames</p>
      </div>
      <div class="feature">
        <div class="emoji">⚡</div>
        <h3>Instant Switching</h3>
        <p>Change device, size and zoom without reloading</p>
      </div>
      <div class="feature">
        <div class="emoji">🎨</div>
        <h3>Clean Interface</h3>
        <p>A modern toolbar that stays out of your way</p>
      </div>
    </div>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_self_contained() {
        // no scripts and no external fetches, so it renders with the network down
        assert!(!FALLBACK_DOCUMENT.contains("<script"));
        assert!(!FALLBACK_DOCUMENT.contains("http://"));
        assert!(!FALLBACK_DOCUMENT.contains("https://"));
        assert!(FALLBACK_DOCUMENT.contains("<style>"));
    }
}
