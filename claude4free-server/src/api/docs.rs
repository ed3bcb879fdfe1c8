//! API documentation page served at the root path.

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let models = state
        .registry
        .supported_models()
        .map(|id| format!("<code>{id}</code>"))
        .collect::<Vec<_>>()
        .join(" ");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Claude4Free API v{version}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }}
        .container {{ background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        code {{ background: #f1f3f4; padding: 2px 6px; border-radius: 4px; font-family: 'Monaco', monospace; }}
        pre {{ background: #f8f9fa; padding: 15px; border-radius: 6px; overflow-x: auto; border-left: 4px solid #007bff; }}
        .status {{ padding: 15px; border-radius: 8px; margin: 20px 0; background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }}
        .endpoint {{ background: #e3f2fd; padding: 10px; border-radius: 4px; margin: 10px 0; }}
        h1 {{ color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px; }}
        h2 {{ color: #555; margin-top: 30px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>🤖 Claude4Free API v{version}</h1>
        <p>Free multi-function AI API, proxied through an aggregation provider.</p>

        <div class="status">
            ✅ <strong>Status</strong>: running<br>
            🕐 <strong>Time</strong>: {timestamp}<br>
            🌍 <strong>Environment</strong>: {environment}<br>
            🔗 <strong>API base</strong>: {api_base}
        </div>

        <h2>🎯 Functions</h2>
        <div class="endpoint">💬 <strong>chat</strong> - text conversation with the model of your choice</div>
        <div class="endpoint">🖼️ <strong>image-recognition</strong> - upload an image for analysis</div>
        <div class="endpoint">🔊 <strong>text-to-speech</strong> - speech synthesis (TTS)</div>
        <div class="endpoint">🎨 <strong>text-to-image</strong> - image generation</div>

        <h2>📡 Endpoints</h2>
        <ul>
            <li><code>GET /health</code> - service health check</li>
            <li><code>POST /api/chat</code> - main AI function endpoint</li>
            <li><code>GET /</code> - this page</li>
        </ul>

        <h2>🔧 Usage</h2>
        <pre>
POST /api/chat
Content-Type: multipart/form-data

<strong>Required:</strong>
- message: user message (string, max 10000 characters)
- function: chat | image-recognition | text-to-speech | text-to-image

<strong>chat:</strong>
- model: model id (required, see list below)

<strong>image-recognition:</strong>
- image: image file (required, max 10 MiB, image/* types)

<strong>text-to-speech:</strong>
- tts-language: language code (optional, default: zh-TW)

<strong>text-to-image:</strong>
- img-size: image size (optional, default: 1024x1024)
- img-style: style description (optional)
        </pre>

        <h2>🤖 Supported models</h2>
        <p>{models}</p>

        <h2>⚠️ Status codes</h2>
        <ul>
            <li><strong>200</strong> - handled (including fallback mode replies)</li>
            <li><strong>400</strong> - invalid or missing parameters</li>
            <li><strong>404</strong> - unknown endpoint</li>
            <li><strong>500</strong> - server error</li>
        </ul>

        <p><small>⚡ All replies carry a <code>success</code> field; degraded replies are marked <code>mode: "fallback"</code>.</small></p>
    </div>
</body>
</html>"#,
        version = env!("CARGO_PKG_VERSION"),
        timestamp = super::iso_timestamp(),
        environment = state.config.environment,
        api_base = state.config.upstream_base_url,
        models = models,
    ))
}
