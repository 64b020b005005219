//! The fixed chrome document hosted by the webview: a search bar on top and
//! the result iframe below it.
//!
//! The iframe is the content-display surface. Every lookup ends with the
//! host calling `window.finishLookup(html)`, which assigns the iframe's
//! `srcdoc` and re-enables the controls on every exit path.

pub const CHROME_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
    * {
        box-sizing: border-box;
        margin: 0;
        padding: 0;
    }
    html, body {
        width: 100%;
        height: 100%;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
        background: #f6f8fa;
    }
    #search-bar {
        display: flex;
        align-items: center;
        gap: 8px;
        height: 50px;
        padding: 8px 12px;
        border-bottom: 1px solid #d0d7de;
    }
    #verb {
        flex: 1;
        padding: 6px 10px;
        font-size: 14px;
        border: 1px solid #d0d7de;
        border-radius: 6px;
    }
    #search {
        padding: 6px 16px;
        font-size: 14px;
        border: 1px solid #d0d7de;
        border-radius: 6px;
        background: #1f6feb;
        color: #ffffff;
        cursor: pointer;
    }
    #verb:disabled, #search:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    #view {
        width: 100%;
        height: calc(100% - 50px);
        border: none;
        background: #ffffff;
    }
</style>
</head>
<body>
<div id="search-bar">
    <input id="verb" type="text" placeholder="Enter a Dutch verb (e.g., 'komen')" autofocus>
    <button id="search">Search</button>
</div>
<iframe id="view"></iframe>
<script>
    const verb = document.getElementById('verb');
    const search = document.getElementById('search');
    const view = document.getElementById('view');

    function beginLookup() {
        verb.disabled = true;
        search.disabled = true;
        window.ipc.postMessage(verb.value);
    }

    window.finishLookup = function (html) {
        try {
            view.srcdoc = html;
        } finally {
            verb.disabled = false;
            search.disabled = false;
            verb.focus();
        }
    };

    search.addEventListener('click', beginLookup);
    verb.addEventListener('keydown', (event) => {
        if (event.key === 'Enter') beginLookup();
    });
</script>
</body>
</html>
"##;
