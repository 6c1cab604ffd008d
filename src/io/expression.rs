//! Textual layout expressions
//!
//! `h(A, B)` puts A and B side by side, `v(A, B)` stacks A above B, and any
//! other term is the path of a source image. Terms nest freely:
//!
//! ```text
//! h(left.jpg, v(top.png, h(a.jpg, b.jpg)))
//! ```
//!
//! Paths cannot contain `,`, `(` or `)`; surrounding whitespace is ignored.

use crate::io::error::{CollageError, Result, invalid_image};
use crate::layout::composite::{Composite, Orientation};
use crate::layout::source::SourceImage;
use crate::layout::tile::Tile;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parsed layout, still referring to images by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutExpression {
    /// Single source image
    Image(PathBuf),
    /// Two sub-layouts with an orientation
    Pair {
        /// Placed at the origin
        first: Box<LayoutExpression>,
        /// Placed after `first` along the main axis
        second: Box<LayoutExpression>,
        /// Side by side or stacked
        orientation: Orientation,
    },
}

impl LayoutExpression {
    /// Parse an expression
    ///
    /// # Errors
    ///
    /// Returns an expression error with the byte offset of the first problem
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser { input, position: 0 };
        let expression = parser.term()?;
        parser.skip_whitespace();
        if parser.position < input.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(expression)
    }

    /// Image paths, depth-first and left to right, duplicates included
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = Vec::new();
        self.collect_paths(&mut paths);
        paths
    }

    fn collect_paths<'a>(&'a self, paths: &mut Vec<&'a Path>) {
        match self {
            Self::Image(path) => paths.push(path),
            Self::Pair { first, second, .. } => {
                first.collect_paths(paths);
                second.collect_paths(paths);
            }
        }
    }

    /// Build the tile tree, decoding each distinct path once through `load`
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `load`
    pub fn build_tile<F>(&self, mut load: F) -> Result<Tile>
    where
        F: FnMut(&Path) -> Result<SourceImage>,
    {
        let mut images: HashMap<PathBuf, SourceImage> = HashMap::new();
        for path in self.paths() {
            if !images.contains_key(path) {
                images.insert(path.to_path_buf(), load(path)?);
            }
        }
        self.resolve(&images)
    }

    /// Build the tile tree from already decoded images
    ///
    /// # Errors
    ///
    /// Returns an invalid image error for a path missing from `images`
    pub fn resolve(&self, images: &HashMap<PathBuf, SourceImage>) -> Result<Tile> {
        match self {
            Self::Image(path) => images
                .get(path)
                .cloned()
                .map(Tile::leaf)
                .ok_or_else(|| invalid_image(path.clone(), &"image was not loaded")),
            Self::Pair {
                first,
                second,
                orientation,
            } => Ok(Tile::Composite(Composite::with_orientation(
                first.resolve(images)?,
                second.resolve(images)?,
                *orientation,
            ))),
        }
    }
}

impl FromStr for LayoutExpression {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LayoutExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(path) => write!(f, "{}", path.display()),
            Self::Pair {
                first,
                second,
                orientation,
            } => {
                let tag = if orientation.is_vertical() { 'v' } else { 'h' };
                write!(f, "{tag}({first}, {second})")
            }
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        self.input.get(self.position..).unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn error(&self, reason: &str) -> CollageError {
        CollageError::Expression {
            position: self.position,
            reason: reason.to_string(),
        }
    }

    fn expect(&mut self, symbol: char) -> Result<()> {
        self.skip_whitespace();
        if self.rest().starts_with(symbol) {
            self.position += symbol.len_utf8();
            Ok(())
        } else {
            Err(self.error(&format!("expected '{symbol}'")))
        }
    }

    fn term(&mut self) -> Result<LayoutExpression> {
        self.skip_whitespace();
        if let Some(orientation) = self.pair_tag() {
            self.expect('(')?;
            let first = self.term()?;
            self.expect(',')?;
            let second = self.term()?;
            self.expect(')')?;
            return Ok(LayoutExpression::Pair {
                first: Box::new(first),
                second: Box::new(second),
                orientation,
            });
        }
        self.path()
    }

    // Consumes `h` or `v` only when an opening parenthesis follows
    fn pair_tag(&mut self) -> Option<Orientation> {
        let rest = self.rest();
        let orientation = match rest.chars().next()? {
            'h' => Orientation::Horizontal,
            'v' => Orientation::Vertical,
            _ => return None,
        };
        let after = rest.get(1..)?.trim_start();
        if after.starts_with('(') {
            self.position += 1;
            Some(orientation)
        } else {
            None
        }
    }

    fn path(&mut self) -> Result<LayoutExpression> {
        let rest = self.rest();
        let end = rest.find([',', '(', ')']).unwrap_or(rest.len());
        let raw = rest.get(..end).unwrap_or_default();
        let path = raw.trim_end();
        if path.is_empty() {
            return Err(self.error("expected an image path"));
        }
        if rest.get(end..).is_some_and(|r| r.starts_with('(')) {
            return Err(self.error("layouts start with 'h(' or 'v('"));
        }
        self.position += raw.len();
        Ok(LayoutExpression::Image(PathBuf::from(path)))
    }
}
