//! Assembly of the final document handed to the embedded view.

/// Appended after the site's own styles so it always wins: forces the
/// extracted fragment into the narrow embedded view no matter what layout
/// the source page assumed.
pub const OVERRIDE_CSS: &str = "\
body {
    margin: 0;
    padding: 10px;
    width: 100%;
    box-sizing: border-box;
    font-size: 14px;
    line-height: 1.4;
}
.ribbon {
    width: 180% !important;
    color: black !important;
    background-color: #f0f0f0 !important;
    padding: 10px !important;
    border-radius: 5px !important;
    margin-bottom: 10px !important;
}
#conjugation-data {
    margin: 0;
    width: 100%;
    padding: 10px;
    box-sizing: border-box;
    overflow-x: auto;
}
.ui {
    margin: 0;
    width: 100%;
    padding: 10px;
    box-sizing: border-box;
}
.fourteen {
    margin: 0;
    width: 100%;
    padding: 10px;
    box-sizing: border-box;
}
table {
    width: 100%;
    border-collapse: collapse;
    margin: 10px 0;
}
td, th {
    padding: 8px;
    border: 1px solid #ddd;
    word-wrap: break-word;
}
@media screen and (max-width: 600px) {
    body { font-size: 12px; }
    td, th { padding: 4px; }
}
";

/// Wrap the serialized fragment and the collected site CSS into a minimal
/// standalone document. The override block comes last in the style element
/// so its rules take precedence over the fetched ones.
pub fn standalone_document(site_css: &str, fragment_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n{site_css}\n{OVERRIDE_CSS}</style>\n\
         </head>\n\
         <body>\n{fragment_html}\n</body>\n\
         </html>\n"
    )
}
