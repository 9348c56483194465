use std::io::BufRead;

use nom::{
    bytes::complete::{take_till1, take_while, take_while1},
    character::complete::digit1,
    combinator::{all_consuming, map, opt},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use tracing::{debug, trace, warn};

use crate::error::{Error, Malformation, RecordKind, Result};
use crate::model::*;

/// What to do with an `f` record that lists more than three indices.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FacePolicy {
    /// Reject the record as malformed.
    #[default]
    Strict,
    /// Keep the first three indices and drop the rest.
    Truncate,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub faces: FacePolicy,
}

/*
    Basic Parsers
*/

fn space(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn opt_space(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(space, token))(input)
}

/// A whole line: the tag and the fields after it, or nothing for a blank line.
fn record(input: &str) -> IResult<&str, Option<(&str, Vec<&str>)>> {
    all_consuming(delimited(opt_space, opt(pair(token, fields)), opt_space))(input)
}

/*
    Face
*/

/// A decimal index; one too large for `usize` saturates, so it still reads as out of range.
fn face_index(input: &str) -> IResult<&str, usize> {
    map(digit1, |digits: &str| digits.parse::<usize>().unwrap_or(usize::MAX))(input)
}

/// Single forward pass over the records of one mesh.
struct Parser<'o> {
    options: &'o ParseOptions,
    mesh: Mesh,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Parser {
            options,
            mesh: Mesh::default(),
        }
    }

    fn line(&mut self, line: usize, content: &str) -> Result<()> {
        let (tag, fields) = match record(content) {
            Ok((_, Some(parsed))) => parsed,
            Ok((_, None)) => return Ok(()),
            Err(_) => {
                return Err(malformed(
                    line,
                    RecordKind::Unknown,
                    Malformation::Unparseable,
                    content,
                ))
            }
        };

        match tag {
            "v" => {
                let vertex = self.vertex(line, content, &fields)?;
                self.mesh.vertices.push(vertex);
            }
            "f" => {
                let triangle = self.face(line, content, &fields)?;
                self.mesh.triangles.push(triangle);
            }
            _ => trace!(line, tag, "skipping unrecognized record"),
        }
        Ok(())
    }

    fn vertex(&self, line: usize, content: &str, fields: &[&str]) -> Result<Vertex> {
        // anything after z (e.g. a w component) is ignored
        match fields {
            [x, y, z, ..] => Ok(Vertex::new(*x, *y, *z)),
            _ => Err(malformed(
                line,
                RecordKind::Vertex,
                Malformation::TooFewFields(fields.len()),
                content,
            )),
        }
    }

    fn face(&self, line: usize, content: &str, fields: &[&str]) -> Result<Triangle> {
        let (a, b, c) = match (fields, self.options.faces) {
            ([a, b, c], _) => (*a, *b, *c),
            ([a, b, c, rest @ ..], FacePolicy::Truncate) => {
                warn!(line, dropped = rest.len(), "truncating polygon to a triangle");
                (*a, *b, *c)
            }
            ([_, _, _, ..], FacePolicy::Strict) => {
                return Err(malformed(
                    line,
                    RecordKind::Face,
                    Malformation::TooManyFields(fields.len()),
                    content,
                ))
            }
            _ => {
                return Err(malformed(
                    line,
                    RecordKind::Face,
                    Malformation::TooFewFields(fields.len()),
                    content,
                ))
            }
        };

        let resolve = |token: &str| -> Result<Vertex> {
            let index = match all_consuming(face_index)(token) {
                Ok((_, index)) => index,
                Err(_) => {
                    return Err(malformed(
                        line,
                        RecordKind::Face,
                        Malformation::BadIndex(token.to_string()),
                        content,
                    ))
                }
            };
            index
                .checked_sub(1)
                .and_then(|i| self.mesh.vertices.get(i))
                .cloned()
                .ok_or(Error::OutOfRangeIndex {
                    line,
                    index,
                    available: self.mesh.vertices.len(),
                })
        };

        Ok(Triangle::new(resolve(a)?, resolve(b)?, resolve(c)?))
    }

    fn finish(self) -> Mesh {
        debug!(
            vertices = self.mesh.vertices.len(),
            triangles = self.mesh.triangles.len(),
            "parsed mesh"
        );
        self.mesh
    }
}

fn malformed(line: usize, kind: RecordKind, found: Malformation, content: &str) -> Error {
    Error::MalformedRecord {
        line,
        kind,
        found,
        content: content.trim().to_string(),
    }
}

/// Parses mesh records from a sequence of lines. Line numbers in errors start at 1.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Mesh>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new(options);
    for (n, line) in lines.into_iter().enumerate() {
        parser.line(n + 1, line.as_ref())?;
    }
    Ok(parser.finish())
}

pub fn parse_obj(data: &str, options: &ParseOptions) -> Result<Mesh> {
    parse_lines(data.lines(), options)
}

pub fn parse_reader<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Mesh> {
    let mut parser = Parser::new(options);
    for (n, line) in reader.lines().enumerate() {
        parser.line(n + 1, &line?)?;
    }
    Ok(parser.finish())
}
