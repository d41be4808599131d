//! Streaming template interpreter.
//!
//! A template is literal text with two-byte escapes: [`TRIGGER`] followed by a
//! directive letter. Output goes straight to the sink; literal runs are written
//! as slices of the template, never copied into an intermediate buffer.

use std::io::{self, Write};

use crate::host_info::HostInfo;

/// Byte that introduces a directive.
pub const TRIGGER: u8 = b'\\';

/// Values available to directives during one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub host: &'a HostInfo,
    /// Terminal name with the `/dev/` prefix already stripped
    pub tty: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(host: &'a HostInfo, tty: &'a str) -> Self {
        Self { host, tty }
    }
}

/// A recognised directive letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `l`
    TtyName,
    /// `m`
    Machine,
    /// `n`
    NodeName,
    /// `o`
    DomainName,
    /// `r`
    Release,
    /// `s`
    SystemName,
    /// `v`
    Version,
}

impl Directive {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'l' => Some(Directive::TtyName),
            b'm' => Some(Directive::Machine),
            b'n' => Some(Directive::NodeName),
            b'o' => Some(Directive::DomainName),
            b'r' => Some(Directive::Release),
            b's' => Some(Directive::SystemName),
            b'v' => Some(Directive::Version),
            _ => None,
        }
    }

    fn value<'a>(self, ctx: &RenderContext<'a>) -> &'a str {
        let host = ctx.host;
        match self {
            Directive::TtyName => ctx.tty,
            Directive::Machine => &host.machine,
            Directive::NodeName => &host.node_name,
            Directive::DomainName => host.domain.as_deref().unwrap_or(""),
            Directive::Release => &host.release,
            Directive::SystemName => &host.system_name,
            Directive::Version => &host.version,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Literal,
    /// The previous byte was [`TRIGGER`]
    Escape,
}

/// Render `template` into `out`, substituting directives from `ctx`.
///
/// Unknown directives are written as the raw two bytes. A trigger byte at the
/// very end of the template ends the render without being written.
pub fn render<W: Write + ?Sized>(
    template: &[u8],
    ctx: &RenderContext<'_>,
    out: &mut W,
) -> io::Result<()> {
    let mut state = Scan::Literal;
    // Start of the literal run not yet written
    let mut start = 0;

    for (pos, &byte) in template.iter().enumerate() {
        match state {
            Scan::Literal => {
                if byte == TRIGGER {
                    out.write_all(&template[start..pos])?;
                    state = Scan::Escape;
                }
            }
            Scan::Escape => {
                match Directive::from_byte(byte) {
                    Some(directive) => {
                        out.write_all(directive.value(ctx).as_bytes())?;
                        start = pos + 1;
                    }
                    None => start = pos - 1,
                }
                state = Scan::Literal;
            }
        }
    }

    if state == Scan::Literal {
        out.write_all(&template[start..])?;
    }
    Ok(())
}
