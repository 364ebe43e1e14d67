//! Fixed-order report output, captured through the `io::Write` seam.

use webprobe::report::{Findings, Report};
use webprobe::Cookie;

fn render(report: &Report) -> String {
    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn success_report_layout() {
    let report = Report {
        host: "example.com".to_string(),
        supports_http2: true,
        findings: Some(Findings {
            cookies: vec![
                Cookie {
                    name: "sid".to_string(),
                    expires: Some("Mon, 01 Jan 2024 00:00:00 GMT".to_string()),
                    domain: Some("example.com".to_string()),
                },
                Cookie {
                    name: "bare".to_string(),
                    expires: None,
                    domain: None,
                },
            ],
            password_protected: false,
        }),
    };

    assert_eq!(
        render(&report),
        "website: example.com\n\
         1. Supports http2: yes\n\
         2. List of Cookies:\n\
         cookie name: sid, expires time: Mon, 01 Jan 2024 00:00:00 GMT, domain name: example.com\n\
         cookie name: bare\n\
         3. Password-protected: no\n"
    );
}

#[test]
fn protected_site_is_flagged_yes() {
    let findings = Findings::from_response_text(
        "HTTP/1.1 401 Unauthorized\r\nWWW-Authenticate: Basic\r\n\r\n",
    );
    let report = Report {
        host: "secure.example".to_string(),
        supports_http2: false,
        findings: Some(findings),
    };

    let rendered = render(&report);
    assert!(rendered.contains("1. Supports http2: no\n"));
    assert!(rendered.ends_with("3. Password-protected: yes\n"));
}

#[test]
fn fetch_failure_fallback_layout() {
    let report = Report {
        host: "example.com".to_string(),
        supports_http2: false,
        findings: None,
    };

    assert_eq!(
        render(&report),
        "website: example.com\n\
         1. Supports http2: no\n\
         Failed to fetch a response.\n"
    );
}

#[test]
fn unparsable_cookie_is_dropped_from_findings() {
    let findings = Findings::from_response_text(
        "HTTP/1.1 200 OK\r\nSet-Cookie: broken\r\nSet-Cookie: good=1\r\n\r\n",
    );
    assert_eq!(findings.cookies.len(), 1);
    assert_eq!(findings.cookies[0].name, "good");
    assert!(!findings.password_protected);
}
