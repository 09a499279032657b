#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use statefacts::api::Components;
use statefacts::Config;

pub const CENSUS_PATH: &str = "/data/2020/dec/pl";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Configuration with all three upstreams on `server`.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        census_url: format!("{}?get=NAME,P1_001N&for=state:*", server.url(CENSUS_PATH)),
        wikipedia_base: server.base_url(),
        commons_base: server.base_url(),
        timeout_ms: 5_000,
        ..Config::default()
    }
}

pub fn components_for(server: &MockServer) -> Components {
    Components::from_config(&config_for(server)).expect("components from mock config")
}

pub fn census_body() -> String {
    r#"[["NAME","P1_001N","state"],
        ["California","39538223","06"],
        ["Georgia","10711908","13"],
        ["New York","20201249","36"],
        ["Texas","29145505","48"],
        ["Washington","7705281","53"]]"#
        .to_string()
}

/// A state article with flag and seal cells and a 20-row settlement infobox
/// carrying `capital` in row 12 and `governor` in row 17.
pub fn article_html(file_stem: &str, capital: &str, governor: &str) -> String {
    let rows: String = (1..=20)
        .map(|n| {
            let cell = match n {
                12 => format!(r#"<a href="/wiki/{capital}">{capital}</a>"#),
                17 => format!(
                    r#"<span class="nowrap"><a href="/wiki/{governor}">{governor}</a> (<a href="/wiki/D">D</a>)</span>"#
                ),
                _ => format!("row {n}"),
            };
            format!("<tr><th>Row {n}</th><td>{cell}</td></tr>")
        })
        .collect();
    format!(
        r#"<!DOCTYPE html><html><body>
<div id="mw-content-text"><div class="mw-content-ltr mw-parser-output">
<table class="infobox ib-settlement vcard"><tbody>{rows}</tbody></table>
<div class="ib-settlement-cols-cell"><span class="mw-image-border" typeof="mw:File"><a href="/wiki/File:Flag_of_{file_stem}.svg" class="mw-file-description"><img src="//upload.wikimedia.org/flags/Flag_of_{file_stem}.svg" width="100"></a></span></div>
<div class="ib-settlement-cols-cell"><span typeof="mw:File"><a href="/wiki/File:Seal_of_{file_stem}.svg" class="mw-file-description"><img src="//upload.wikimedia.org/seals/Seal_of_{file_stem}.svg" width="100"></a></span></div>
</div></div></body></html>"#
    )
}

/// A media page whose file history credits `user` with the current revision.
pub fn file_page_html(user: &str) -> String {
    format!(
        r#"<html><body><div id="mw-imagepage-section-filehistory"><table><tbody>
<tr><th></th><th>Date/Time</th><th>Thumbnail</th><th>Dimensions</th><th>User</th><th>Comment</th></tr>
<tr><td>current</td><td>12:00, 1 January 2020</td><td>thumb</td><td>600 × 400</td><td><a href="/wiki/User:{user}"><bdi>{user}</bdi></a></td><td>update</td></tr>
</tbody></table></div></body></html>"#
    )
}

pub fn mock_census(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path(CENSUS_PATH)
            .query_param("get", "NAME,P1_001N");
        then.status(200)
            .header("content-type", "application/json")
            .body(census_body());
    })
}

pub fn mock_article<'a>(server: &'a MockServer, identifier: &str, html: String) -> Mock<'a> {
    let path = format!("/wiki/{identifier}");
    server.mock(move |when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=UTF-8")
            .body(html);
    })
}

pub fn mock_file_page<'a>(server: &'a MockServer, file: &str, user: &str) -> Mock<'a> {
    let path = format!("/wiki/File:{file}");
    let body = file_page_html(user);
    server.mock(move |when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=UTF-8")
            .body(body);
    })
}
