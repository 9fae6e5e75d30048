// Copyright 2025 MCP Client Suite Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response rendering for the terminal.
//!
//! The server gives no schema guarantee, so rendering is best-effort: a
//! response that parses as JSON is pretty-printed, anything else is printed
//! as-is (lossily decoded when it is not valid UTF-8). A server-reported
//! application error is still a successful exchange and renders the same
//! way.

use mcp_common::protocol::Response;

/// Renders a response for stdout.
pub fn render(response: &Response) -> String {
    match response.json() {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(response.as_bytes()).into_owned()),
        Err(_) => String::from_utf8_lossy(response.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_pretty_printed() {
        let response = Response::new(br#"{"status":"ok","count":2}"#.to_vec());
        let rendered = render(&response);
        assert!(rendered.contains("\"status\": \"ok\""));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_plain_text_is_verbatim() {
        let response = Response::new(b"Invalid credentials".to_vec());
        assert_eq!(render(&response), "Invalid credentials");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let response = Response::new(vec![b'o', b'k', 0xFF]);
        let rendered = render(&response);
        assert!(rendered.starts_with("ok"));
    }
}
