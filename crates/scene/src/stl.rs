//! ASCII STL import.
//!
//! ```text
//! solid name
//!   facet normal 0 0 1
//!     outer loop
//!       vertex 0 0 0
//!       vertex 1 0 0
//!       vertex 0 1 0
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! Authored facet normals are read but not used: triangle normals are always
//! derived from the vertex winding.
use std::{fmt, iter::Peekable, num::ParseFloatError, rc::Rc, str::SplitAsciiWhitespace};

use geom::v64;

use crate::{InvalidObject, Material, WorldObject};

#[derive(Debug)]
pub struct ParseStlError {
    kind: ErrorKind,
    facet: Option<usize>,
}

#[derive(Debug, displaydoc::Display)]
enum ErrorKind {
    /// unexpected end of file
    UnexpectedEof,
    /// expected `{0}`
    Expected(&'static str),
    /// invalid coordinate: {0}
    ParseFloatError(ParseFloatError),
    /// {0}
    InvalidObject(InvalidObject),
}

impl std::error::Error for ParseStlError {}

/// Parses `input` into an object at `origin` with `material` on every facet.
pub fn parse(
    input: &str,
    origin: v64,
    material: Rc<Material>,
) -> Result<WorldObject, ParseStlError> {
    let mut p = Parser::new(input);
    let mut points = Vec::new();
    match solid(&mut p, &mut points) {
        Ok(()) => (),
        Err(kind) => return Err(ParseStlError { kind, facet: p.facet }),
    }
    let faces: Vec<[u32; 3]> =
        (0..points.len() as u32 / 3).map(|i| [3 * i, 3 * i + 1, 3 * i + 2]).collect();
    log::debug!("imported {} facets", faces.len());
    WorldObject::uniform(origin, points, faces, material)
        .map_err(|err| ParseStlError { kind: ErrorKind::InvalidObject(err), facet: None })
}

impl fmt::Display for ParseStlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.facet {
            Some(facet) => write!(f, "in facet {facet}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

struct Parser<'i> {
    facet: Option<usize>,
    words: Peekable<SplitAsciiWhitespace<'i>>,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str) -> Parser<'i> {
        Parser { facet: None, words: input.split_ascii_whitespace().peekable() }
    }
    fn next(&mut self) -> Result<&'i str, ErrorKind> {
        self.words.next().ok_or(ErrorKind::UnexpectedEof)
    }
    fn at(&mut self, token: &'static str) -> bool {
        self.words.peek() == Some(&token)
    }
    fn expect(&mut self, token: &'static str) -> Result<(), ErrorKind> {
        if self.next()? != token {
            Err(ErrorKind::Expected(token))?
        }
        Ok(())
    }
}

fn solid(p: &mut Parser<'_>, points: &mut Vec<v64>) -> Result<(), ErrorKind> {
    p.expect("solid")?;
    // The name is optional and may span several words.
    while !(p.at("facet") || p.at("endsolid")) {
        p.next()?;
    }
    let mut i = 0;
    while p.at("facet") {
        p.facet = Some(i);
        facet(p, points)?;
        i += 1;
    }
    p.facet = None;
    p.expect("endsolid")
}

fn facet(p: &mut Parser<'_>, points: &mut Vec<v64>) -> Result<(), ErrorKind> {
    p.expect("facet")?;
    p.expect("normal")?;
    let _normal = vector(p)?;
    p.expect("outer")?;
    p.expect("loop")?;
    for _ in 0..3 {
        p.expect("vertex")?;
        points.push(vector(p)?);
    }
    p.expect("endloop")?;
    p.expect("endfacet")
}

fn vector(p: &mut Parser<'_>) -> Result<v64, ErrorKind> {
    let [x, y, z] = [scalar(p)?, scalar(p)?, scalar(p)?];
    Ok(v64(x, y, z))
}

fn scalar(p: &mut Parser<'_>) -> Result<f64, ErrorKind> {
    let t = p.next()?;
    t.parse::<f64>().map_err(ErrorKind::ParseFloatError)
}
