//! Integration tests for the banner interpreter and issue-file loading.

use getty::banner::{render, Banner, BannerTemplate, RenderContext, TemplateSource, TRIGGER};
use getty::host_info::HostInfo;
use tempfile::TempDir;

fn host() -> HostInfo {
    HostInfo {
        system_name: "TestOS".to_string(),
        node_name: "testhost".to_string(),
        release: "6.1.0".to_string(),
        version: "1.0".to_string(),
        machine: "x86_64".to_string(),
        domain: Some("lan".to_string()),
    }
}

fn render_bytes(template: &[u8], tty: &str) -> Vec<u8> {
    let host = host();
    let mut out = Vec::new();
    render(template, &RenderContext::new(&host, tty), &mut out).unwrap();
    out
}

// ==================== Interpreter properties ====================

#[test]
fn test_literal_bytes_emitted_once_in_order() {
    let template = b"line one\nline two\ttabbed\n\x01\xfe binary";
    assert_eq!(render_bytes(template, "tty1"), template.to_vec());
}

#[test]
fn test_matched_trigger_never_emitted() {
    let out = render_bytes(b"\\s\\v\\l\\m\\r\\n\\o", "tty1");
    assert!(!out.contains(&TRIGGER));
    assert_eq!(out, b"TestOS1.0tty1x86_646.1.0testhostlan");
}

#[test]
fn test_substitutions_interleave_with_literals() {
    assert_eq!(
        render_bytes(b"<\\s>-<\\r>-<\\m>", "tty1"),
        b"<TestOS>-<6.1.0>-<x86_64>"
    );
}

#[test]
fn test_truncated_escape() {
    assert_eq!(render_bytes(b"Welcome \\s\\", "tty1"), b"Welcome TestOS");
}

#[test]
fn test_unknown_directive_then_resume() {
    assert_eq!(render_bytes(b"\\x\\s!", "tty1"), b"\\xTestOS!");
    assert_eq!(render_bytes(b"100\\% \\l", "tty2"), b"100\\% tty2");
}

#[test]
fn test_welcome_template() {
    assert_eq!(
        render_bytes(b"Welcome to \\s \\v \\n \\l\n\n", "tty1"),
        b"Welcome to TestOS 1.0 testhost tty1\n\n"
    );
}

// ==================== Issue file ====================

#[test]
fn test_issue_file_rendered_with_prompt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issue");
    std::fs::write(&path, "\\s \\r on \\m\nKernel \\v\n\n").unwrap();

    let mut out = Vec::new();
    Banner::new(&path, "\\n login: ")
        .show(&host(), "ttyS0", &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nTestOS 6.1.0 on x86_64\nKernel 1.0\n\ntesthost login: "
    );
}

#[test]
fn test_issue_file_edits_picked_up_between_renders() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issue");
    let banner = Banner::new(&path, "login: ");

    let mut first = Vec::new();
    banner.show(&host(), "tty1", &mut first).unwrap();
    assert!(String::from_utf8(first).unwrap().starts_with("\nWelcome to TestOS"));

    std::fs::write(&path, "Maintenance on \\n\n").unwrap();
    let mut second = Vec::new();
    banner.show(&host(), "tty1", &mut second).unwrap();
    assert_eq!(
        String::from_utf8(second).unwrap(),
        "\nMaintenance on testhost\nlogin: "
    );
}

#[test]
fn test_unreadable_issue_uses_builtin() {
    let dir = TempDir::new().unwrap();
    let template = BannerTemplate::load(&dir.path().join("absent"));
    assert_eq!(template.source(), &TemplateSource::BuiltIn);
}
