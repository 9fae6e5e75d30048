//! Reply Framing
//!
//! The server writes its reply as a bare byte stream: no length prefix, no
//! terminator. The only end-of-reply signals available to a client are the
//! peer closing the connection and, heuristically, a read that comes back
//! with fewer bytes than were asked for.
//!
//! The strategy lives behind [`Framing`] so that a future protocol revision
//! (an explicit frame length, or a sentinel negotiated with the server) is a
//! localized change rather than a rewrite of the receive path.

use std::io::{self, Read};

/// Size of the receive buffer, and therefore the short-read threshold.
pub const RECV_BUFFER_SIZE: usize = 4096;

/// Strategy for detecting the end of a server reply.
///
/// Currently only the short-read-or-EOF heuristic is supported; the enum
/// exists so a length-prefixed or delimiter-based scheme can be added
/// without touching [`Session`](super::Session) call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Read fixed-size chunks; a read shorter than the buffer, or EOF, ends
    /// the reply.
    ///
    /// This is a heuristic, not real framing: a reply whose length is an
    /// exact multiple of [`RECV_BUFFER_SIZE`] looks like "more data coming"
    /// and costs one extra read that only returns once the peer closes the
    /// connection. The server closes after every reply, so the loop still
    /// terminates, but a reply can never be detected as complete while the
    /// connection stays open. Known-fragile; kept for wire compatibility
    /// with the deployed server.
    #[default]
    ShortReadOrEof,
}

impl Framing {
    /// Reads one complete reply from `reader`.
    ///
    /// Every read either returns 0 (peer closed, reply complete), an error
    /// (fatal, propagated), or `n` bytes which are appended to the output.
    /// Under `ShortReadOrEof`, the loop continues only while reads fill the
    /// buffer exactly.
    pub fn read_reply<R: Read>(&self, reader: &mut R) -> io::Result<Vec<u8>> {
        match self {
            Framing::ShortReadOrEof => read_until_short_read(reader),
        }
    }
}

fn read_until_short_read<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut reply = Vec::new();
    let mut buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            // peer closed
            break;
        }
        reply.extend_from_slice(&buf[..n]);
        if n < RECV_BUFFER_SIZE {
            // short read: no more data pending
            break;
        }
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Simulated peer that serves scripted chunks, one per read call, and
    /// counts how often it was asked.
    struct ChunkReader {
        chunks: VecDeque<Vec<u8>>,
        reads: usize,
    }

    impl ChunkReader {
        fn new(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                chunks: chunks.into(),
                reads: 0,
            }
        }
    }

    impl Read for ChunkReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            match self.chunks.pop_front() {
                Some(chunk) => {
                    assert!(chunk.len() <= buf.len(), "scripted chunk exceeds buffer");
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                None => Ok(0),
            }
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_full_chunks_then_short_chunk() {
        let n = 3;
        let full = vec![b'x'; RECV_BUFFER_SIZE];
        let short = b"tail".to_vec();

        let mut chunks: Vec<Vec<u8>> = std::iter::repeat(full.clone()).take(n).collect();
        chunks.push(short.clone());
        let mut reader = ChunkReader::new(chunks);

        let reply = Framing::ShortReadOrEof.read_reply(&mut reader).unwrap();

        let mut expected = Vec::new();
        for _ in 0..n {
            expected.extend_from_slice(&full);
        }
        expected.extend_from_slice(&short);
        assert_eq!(reply, expected);
        // the short read ends the loop without another call
        assert_eq!(reader.reads, n + 1);
    }

    #[test]
    fn test_exact_buffer_multiple_terminates_on_eof() {
        let full = vec![b'y'; RECV_BUFFER_SIZE];
        let mut reader = ChunkReader::new(vec![full.clone()]);

        let reply = Framing::ShortReadOrEof.read_reply(&mut reader).unwrap();

        assert_eq!(reply, full);
        // the full read forces one extra call, answered by EOF
        assert_eq!(reader.reads, 2);
    }

    #[test]
    fn test_single_short_read() {
        let mut reader = ChunkReader::new(vec![b"small reply".to_vec()]);
        let reply = Framing::ShortReadOrEof.read_reply(&mut reader).unwrap();
        assert_eq!(reply, b"small reply");
        assert_eq!(reader.reads, 1);
    }

    #[test]
    fn test_immediate_eof_is_empty_reply() {
        let mut reader = ChunkReader::new(Vec::new());
        let reply = Framing::ShortReadOrEof.read_reply(&mut reader).unwrap();
        assert!(reply.is_empty());
        assert_eq!(reader.reads, 1);
    }

    #[test]
    fn test_read_error_is_propagated() {
        let result = Framing::ShortReadOrEof.read_reply(&mut FailingReader);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::ConnectionReset);
    }
}
