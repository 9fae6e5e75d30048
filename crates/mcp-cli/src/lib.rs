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

//! # MCP CLI
//!
//! Command-line interface for the MCP server: one binary, one subcommand
//! per remote operation.
//!
//! ## Architecture
//!
//! The CLI uses the `argh` crate for argument parsing and dispatches every
//! subcommand through the same path: build a `Command`, hand it to
//! `McpClient`, print whatever comes back. All transport and envelope logic
//! lives in `mcp-common`/`mcp-client`; this crate only maps flags to
//! commands and bytes to terminal output.
//!
//! ## Output Contract
//!
//! The response body goes to stdout (pretty-printed when it parses as JSON,
//! verbatim otherwise) so the binary composes with `jq` and friends; logs
//! and errors go to stderr.

pub mod output;
