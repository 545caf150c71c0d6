//! Tokenizer for multi-token word literals such as "schließen ab".

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Punct(char),
}

/// Letters, including umlauts and ß, plus the hyphen of compounds.
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '-'
}

pub fn tokenize(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_word_char), RawToken::Word),
            map(char('.'), |_| RawToken::Punct('.')),
            map(char(','), |_| RawToken::Punct(',')),
            map(char('?'), |_| RawToken::Punct('?')),
            map(char('!'), |_| RawToken::Punct('!')),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;
                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char and keep going.
                match input.chars().next() {
                    Some(c) => input = &input[c.len_utf8()..],
                    None => break,
                }
            }
        }
    }

    result
}

/// A verb literal split into its verb and the particles written after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbLiteral {
    pub verb: String,
    pub particles: Vec<String>,
}

impl VerbLiteral {
    /// A single trailing particle is a separable prefix; the full verb is
    /// then particle + verb ("schließen ab" -> "abschließen").
    pub fn separable(&self) -> Option<(String, &str)> {
        match self.particles.as_slice() {
            [particle] => Some((format!("{}{}", particle, self.verb), particle.as_str())),
            _ => None,
        }
    }
}

/// Returns `None` for a plain one-word literal.
pub fn split_verb_literal(literal: &str) -> Option<VerbLiteral> {
    let mut words = tokenize(literal).into_iter().filter_map(|(_, token)| match token {
        RawToken::Word(word) => Some(word.to_string()),
        RawToken::Punct(_) => None,
    });
    let verb = words.next()?;
    let particles: Vec<String> = words.collect();
    if particles.is_empty() {
        None
    } else {
        Some(VerbLiteral { verb, particles })
    }
}
