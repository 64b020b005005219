use httpmock::prelude::*;
use vervoeger_fetch::{ConjugateError, Conjugator};

const CONJUGATION_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<link rel="stylesheet" href="/static/main.css">
<link rel="stylesheet" href="/static/theme.css">
</head>
<body>
<div class="ribbon">komen - to come</div>
<div id="conjugation-data">
  <table><tr><td>ik kom</td><td>jij komt</td><td>hij komt</td></tr></table>
</div>
</body>
</html>"#;

const BARE_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body><p>This verb is not in our database.</p></body></html>"#;

#[test]
fn empty_verb_short_circuits_without_network() {
    let server = MockServer::start();
    let any_request = server.mock(|_when, then| {
        then.status(200);
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    assert!(matches!(
        conjugator.lookup(""),
        Err(ConjugateError::EmptyVerb)
    ));
    assert!(matches!(
        conjugator.lookup("   \t  "),
        Err(ConjugateError::EmptyVerb)
    ));

    assert_eq!(any_request.hits(), 0);
    assert_eq!(
        ConjugateError::EmptyVerb.to_string(),
        "Please enter a verb"
    );
}

#[test]
fn lookup_inlines_styles_and_embeds_fragment() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nl/komen");
        then.status(200)
            .header("content-type", "text/html")
            .body(CONJUGATION_PAGE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/static/main.css");
        then.status(200).body("table { color: rebeccapurple; }");
    });
    server.mock(|when, then| {
        when.method(GET).path("/static/theme.css");
        then.status(200).body(".ribbon { font-weight: bold; }");
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    let document = conjugator.lookup("komen").unwrap();

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("ik kom"));
    assert!(document.contains(r#"<div id="conjugation-data">"#));
    // Both fetched stylesheets plus the override block end up in <style>.
    assert!(document.contains("rebeccapurple"));
    assert!(document.contains("font-weight: bold"));
    assert!(document.contains("border-collapse: collapse"));
    // The surrounding page chrome is not carried over.
    assert!(!document.contains("to come"));
}

#[test]
fn verb_is_trimmed_before_building_the_url() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/nl/zijn");
        then.status(200)
            .body(r#"<html><body><div id="conjugation-data">ik ben</div></body></html>"#);
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    conjugator.lookup("  zijn  ").unwrap();
    page.assert();
}

#[test]
fn missing_container_reports_no_conjugation_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nl/xyzzy");
        then.status(200).body(BARE_PAGE);
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    let err = conjugator.lookup("xyzzy").unwrap_err();
    assert!(matches!(err, ConjugateError::NoConjugationData));
    assert_eq!(err.to_string(), "No conjugation data found for this verb");
}

#[test]
fn http_error_reports_fetch_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nl/nietbestaand");
        then.status(404);
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    let err = conjugator.lookup("nietbestaand").unwrap_err();
    assert!(matches!(err, ConjugateError::Fetch(_)));
    assert!(err.to_string().starts_with("Error fetching data: "));
    assert!(err.to_string().contains("404"));
}

#[test]
fn unreachable_stylesheets_do_not_fail_the_lookup() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nl/komen");
        then.status(200).body(CONJUGATION_PAGE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/static/main.css");
        then.status(200).body("table { color: rebeccapurple; }");
    });
    // /static/theme.css answers 500; the lookup must still succeed and keep
    // the CSS it did manage to fetch.
    server.mock(|when, then| {
        when.method(GET).path("/static/theme.css");
        then.status(500);
    });

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    let document = conjugator.lookup("komen").unwrap();
    assert!(document.contains("rebeccapurple"));
    assert!(document.contains("ik kom"));
}

#[test]
fn zero_reachable_stylesheets_still_renders_with_overrides() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nl/komen");
        then.status(200).body(CONJUGATION_PAGE);
    });
    // No stylesheet mocks at all: both CSS fetches come back 404.

    let conjugator = Conjugator::with_base_url(&server.base_url()).unwrap();
    let document = conjugator.lookup("komen").unwrap();
    assert!(document.contains("border-collapse: collapse"));
    assert!(document.contains("ik kom"));
}
