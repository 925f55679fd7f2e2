//! Byte-level framing of an HTTP/1.0 request.
//!
//! Header lines end strictly at CRLF and the header block ends at the first
//! empty line. The body is read by a simplified length accounting where any
//! character above U+007F counts as two bytes.

use std::io;

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads the header block and returns its non-empty lines in order.
///
/// Scanning stops after two consecutive CRLF sequences. A bare `\n`, or a
/// `\r` followed by anything other than `\n`, never ends a line; two CRs in a
/// row cancel a pending end-of-block. If the stream closes first, the lines
/// completed so far are returned (none at all when no CRLF ever arrived).
pub async fn read_header_lines<R>(reader: &mut R) -> io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut line = BytesMut::with_capacity(256);
    let mut cr = false;
    let mut just_read_crlf = false;

    while let Some(byte) = next_byte(reader).await? {
        if cr && byte == b'\n' {
            if just_read_crlf {
                break;
            }
            if !line.is_empty() {
                lines.push(String::from_utf8_lossy(&line).into_owned());
            }
            line.clear();
            cr = false;
            just_read_crlf = true;
        } else if byte == b'\r' {
            if cr {
                just_read_crlf = false;
            } else {
                cr = true;
            }
        } else {
            cr = false;
            just_read_crlf = false;
            line.put_u8(byte);
        }
    }

    Ok(lines)
}

/// Reads characters until `byte_length` is reached or the stream ends.
///
/// Each decoded character counts as 1 byte when it is ASCII and 2 otherwise,
/// whatever its real UTF-8 width. Invalid sequences decode to U+FFFD.
pub async fn read_body<R>(reader: &mut R, byte_length: u64) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = String::new();
    let mut counted: u64 = 0;

    while counted < byte_length {
        let Some(ch) = next_char(reader).await? else {
            break;
        };
        counted += legacy_char_len(ch);
        body.push(ch);
    }

    Ok(body)
}

/// Length of a string under the body accounting of [`read_body`].
///
/// # Example
///
/// ```
/// # use httpfs::http::codec::legacy_byte_len;
/// assert_eq!(legacy_byte_len("abc"), 3);
/// assert_eq!(legacy_byte_len("é"), 2);
/// assert_eq!(legacy_byte_len("€"), 2);
/// ```
pub fn legacy_byte_len(s: &str) -> u64 {
    s.chars().map(legacy_char_len).sum()
}

fn legacy_char_len(ch: char) -> u64 {
    if (ch as u32) > 127 { 2 } else { 1 }
}

async fn peek_byte<R>(reader: &mut R) -> io::Result<Option<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let buf = reader.fill_buf().await?;
    Ok(buf.first().copied())
}

async fn next_byte<R>(reader: &mut R) -> io::Result<Option<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let byte = peek_byte(reader).await?;
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

async fn next_char<R>(reader: &mut R) -> io::Result<Option<char>>
where
    R: AsyncBufRead + Unpin,
{
    let Some(lead) = next_byte(reader).await? else {
        return Ok(None);
    };

    let width = match lead {
        0x00..=0x7F => return Ok(Some(lead as char)),
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
    };

    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(width).skip(1) {
        // A non-continuation byte starts the next character; leave it unread.
        match peek_byte(reader).await? {
            Some(b) if b & 0xC0 == 0x80 => {
                reader.consume(1);
                *slot = b;
            }
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        }
    }

    let ch = std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(Some(ch))
}
