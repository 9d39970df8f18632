use std::io::BufRead;
use std::str::FromStr;

use algebraic::Integer;

use crate::error::GraphError;
use crate::graph::Graph;

/// Layout of an edge list: `u v` or `u v w` per edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// A cost follows each pair; otherwise every edge costs one.
    pub weighted: bool,
    /// Vertices are numbered from one.
    pub one_origin: bool,
    pub undirected: bool,
}

impl ReadOptions {
    pub const fn new() -> Self {
        Self {
            weighted: false,
            one_origin: true,
            undirected: false,
        }
    }

    pub const fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub const fn one_origin(mut self, one_origin: bool) -> Self {
        self.one_origin = one_origin;
        self
    }

    pub const fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct Tokens<R> {
    reader: R,
    // current line, reversed so that `pop` yields the next token
    pending: Vec<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            line: 0,
        }
    }

    fn next(&mut self) -> Result<Option<String>, GraphError> {
        let mut buf = String::new();
        while self.pending.is_empty() {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending = buf.split_ascii_whitespace().rev().map(str::to_owned).collect();
        }
        Ok(self.pending.pop())
    }

    fn parse<T: FromStr>(&mut self, read: usize, expected: usize) -> Result<T, GraphError> {
        let token = self
            .next()?
            .ok_or(GraphError::UnexpectedEof { read, expected })?;
        token.parse().map_err(|_| GraphError::InvalidToken {
            token,
            line: self.line,
        })
    }
}

impl<C: Integer + FromStr> Graph<C> {
    /// Reads `edges` edges from a whitespace-separated token stream.
    ///
    /// Nothing is added unless every edge parses. Input is consumed a line
    /// at a time, so tokens sharing a line with the last edge are dropped.
    pub fn read<R: BufRead>(
        &mut self,
        reader: R,
        edges: usize,
        options: ReadOptions,
    ) -> Result<(), GraphError> {
        let mut tokens = Tokens::new(reader);
        let mut parsed = Vec::with_capacity(edges);
        let vertices = self.vertices();
        let offset = usize::from(options.one_origin);

        for read in 0..edges {
            let mut endpoint = || -> Result<usize, GraphError> {
                let vertex: usize = tokens.parse(read, edges)?;
                match vertex.checked_sub(offset) {
                    Some(v) if v < vertices => Ok(v),
                    _ => Err(GraphError::VertexOutOfRange {
                        vertex,
                        line: tokens.line,
                        vertices,
                    }),
                }
            };
            let u = endpoint()?;
            let v = endpoint()?;
            let cost = if options.weighted {
                tokens.parse(read, edges)?
            } else {
                C::ONE
            };
            parsed.push((u, v, cost));
        }

        for (u, v, cost) in parsed {
            if options.undirected {
                self.add_edge_bidirectionally(u, v, cost);
            } else {
                self.add_edge(u, v, cost);
            }
        }
        tracing::debug!(
            edges,
            vertices,
            undirected = options.undirected,
            "read edge list"
        );
        Ok(())
    }

    /// Builds a graph of `vertices` vertices from `edges` edges of `reader`.
    pub fn from_reader<R: BufRead>(
        reader: R,
        vertices: usize,
        edges: usize,
        options: ReadOptions,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertices);
        graph.read(reader, edges, options)?;
        Ok(graph)
    }
}
