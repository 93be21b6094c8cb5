//! Tiny arithmetic expression language for `plot --expr`.
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('-' | '+') unary | power
//! power := atom ('^' unary)?
//! atom  := number | 'x' | 'pi' | 'e' | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` is right associative and binds tighter than unary minus, so `-x^2` is
//! `-(x^2)`.  Evaluation refuses inputs a math library would reject (square
//! root of a negative, log of a non-positive, `asin` outside `[-1, 1]`,
//! division by zero) and surfaces them as [`DomainError`].

use std::{fmt, str::FromStr};

use crate::core::{
    curve::Curve,
    error::{DomainError, ExprError, ExprErrorKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
    Floor,
    Ceil,
}

impl Func {
    fn from_name(s: &str) -> Option<Self> {
        Some(match s {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            _ => return None,
        })
    }

    /// `None` outside the function's real domain.
    fn apply(self, v: f64) -> Option<f64> {
        Some(match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Asin | Self::Acos if !(-1.0..=1.0).contains(&v) => return None,
            Self::Asin => v.asin(),
            Self::Acos => v.acos(),
            Self::Atan => v.atan(),
            Self::Sinh => v.sinh(),
            Self::Cosh => v.cosh(),
            Self::Tanh => v.tanh(),
            Self::Exp => v.exp(),
            Self::Ln | Self::Log10 | Self::Log2 if v <= 0.0 => return None,
            Self::Ln => v.ln(),
            Self::Log10 => v.log10(),
            Self::Log2 => v.log2(),
            Self::Sqrt if v < 0.0 => return None,
            Self::Sqrt => v.sqrt(),
            Self::Abs => v.abs(),
            Self::Floor => v.floor(),
            Self::Ceil => v.ceil(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Num(f64),
    X,
    Neg(Box<Node>),
    Bin(Op, Box<Node>, Box<Node>),
    Call(Func, Box<Node>),
}

impl Node {
    fn eval(&self, x: f64) -> Option<f64> {
        let v = match self {
            Node::Num(v) => *v,
            Node::X => x,
            Node::Neg(n) => -n.eval(x)?,
            Node::Call(func, arg) => func.apply(arg.eval(x)?)?,
            Node::Bin(op, l, r) => {
                let (a, b) = (l.eval(x)?, r.eval(x)?);
                match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div if b == 0.0 => return None,
                    Op::Div => a / b,
                    Op::Pow if a == 0.0 && b < 0.0 => return None,
                    Op::Pow => a.powf(b),
                }
            }
        };
        (!v.is_nan()).then_some(v)
    }
}

/// A parsed expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    source: String,
    root: Node,
}

impl Expr {
    pub fn parse(src: &str) -> Result<Self, ExprError> {
        let mut p = Parser {
            src,
            pos: 0,
            depth: 0,
        };
        let root = p.expr()?;
        if p.peek().is_some() {
            return Err(p.error(ExprErrorKind::TrailingInput));
        }
        Ok(Self {
            source: src.trim().to_owned(),
            root,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Curve for Expr {
    fn eval(&self, x: f64) -> Result<f64, DomainError> {
        self.root.eval(x).ok_or(DomainError { x })
    }
}

impl FromStr for Expr {
    type Err = ExprError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// --- Parser ---

/// Deepest operator/parenthesis nesting accepted. Parse, eval and drop all
/// recurse once per level.
const MAX_DEPTH: usize = 256;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn error(&self, kind: ExprErrorKind) -> ExprError {
        ExprError {
            offset: self.pos,
            kind,
        }
    }

    /// Next non-whitespace byte, leaving `pos` on it.
    fn peek(&mut self) -> Option<u8> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        bytes.get(self.pos).copied()
    }

    fn unexpected(&self) -> ExprError {
        match self.src[self.pos..].chars().next() {
            Some(c) => self.error(ExprErrorKind::UnexpectedChar(c)),
            None => self.error(ExprErrorKind::UnexpectedEnd),
        }
    }

    fn expect(&mut self, want: u8) -> Result<(), ExprError> {
        if self.peek() == Some(want) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// One level deeper in the tree being built.
    fn descend(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error(ExprErrorKind::TooDeep));
        }
        Ok(())
    }

    // Chains like `x + x + x` build a left-leaning tree, so every link counts
    // towards the depth just like a nested parenthesis does.
    fn expr(&mut self) -> Result<Node, ExprError> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(b'+') => Op::Add,
                Some(b'-') => Op::Sub,
                _ => break,
            };
            self.pos += 1;
            self.descend()?;
            lhs = Node::Bin(op, Box::new(lhs), Box::new(self.term()?));
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, ExprError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(b'*') => Op::Mul,
                Some(b'/') => Op::Div,
                _ => break,
            };
            self.pos += 1;
            self.descend()?;
            lhs = Node::Bin(op, Box::new(lhs), Box::new(self.unary()?));
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, ExprError> {
        let depth = self.depth;
        self.descend()?;
        let node = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Node::Neg(Box::new(self.unary()?))
            }
            Some(b'+') => {
                self.pos += 1;
                self.unary()?
            }
            _ => self.power()?,
        };
        self.depth = depth;
        Ok(node)
    }

    fn power(&mut self) -> Result<Node, ExprError> {
        let base = self.atom()?;
        if self.peek() == Some(b'^') {
            self.pos += 1;
            let exp = self.unary()?;
            return Ok(Node::Bin(Op::Pow, Box::new(base), Box::new(exp)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Node, ExprError> {
        match self.peek() {
            None => Err(self.error(ExprErrorKind::UnexpectedEnd)),
            Some(b'(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(b')')?;
                Ok(inner)
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            Some(b) if b.is_ascii_alphabetic() => self.ident(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<Node, ExprError> {
        let rest = &self.src.as_bytes()[self.pos..];
        let (v, used) = lexical_core::parse_partial::<f64>(rest)
            .map_err(|_| self.error(ExprErrorKind::BadNumber))?;
        self.pos += used;
        Ok(Node::Num(v))
    }

    fn ident(&mut self) -> Result<Node, ExprError> {
        let start = self.pos;
        let len = self.src[start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let name = self.src[start..start + len].to_ascii_lowercase();
        self.pos += len;

        if let Some(func) = Func::from_name(&name) {
            self.expect(b'(')?;
            let arg = self.expr()?;
            self.expect(b')')?;
            return Ok(Node::Call(func, Box::new(arg)));
        }
        match name.as_str() {
            "x" => Ok(Node::X),
            "pi" => Ok(Node::Num(std::f64::consts::PI)),
            "e" => Ok(Node::Num(std::f64::consts::E)),
            _ => Err(ExprError {
                offset: start,
                kind: ExprErrorKind::UnknownIdent(name),
            }),
        }
    }
}

// --- Presets ---

/// A named expression selectable with `plot --function`.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub source: &'static str,
    pub about: &'static str,
}

pub const DEFAULT_PRESET: &str = "sin-sq";

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "sin-sq",
        source: "sin(x^2)",
        about: "sine of x squared, faster and faster waves",
    },
    Preset {
        name: "sin",
        source: "sin(x)",
        about: "plain sine wave",
    },
    Preset {
        name: "parabola",
        source: "(x - 3)^2 / 4 - 1",
        about: "upward parabola centred on x = 3",
    },
    Preset {
        name: "sqrt",
        source: "sqrt(x - 2) - 1",
        about: "square root, undefined left of x = 2",
    },
    Preset {
        name: "ln",
        source: "ln(x - 1)",
        about: "natural log, undefined left of x = 1",
    },
    Preset {
        name: "zero",
        source: "0",
        about: "constant zero, fills the lower half",
    },
    Preset {
        name: "undefined",
        source: "sqrt(-1)",
        about: "never defined, plots nothing",
    },
];

#[must_use]
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
