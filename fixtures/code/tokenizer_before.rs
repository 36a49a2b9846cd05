use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq)]
pub enum Token {
    Number(i64),
    Ident(String),
    Plus,
    Minus,
}

pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn number(&mut self, first: char) -> Token {
        let mut value = first.to_digit(10).unwrap() as i64;
        while let Some(c) = self.chars.peek() {
            match c.to_digit(10) {
                Some(d) => value = value * 10 + d as i64,
                None => break,
            }
            self.chars.next();
        }
        Token::Number(value)
    }

    fn ident(&mut self, first: char) -> Token {
        let mut name = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            name.push(c);
            self.chars.next();
        }
        Token::Ident(name)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            ' ' => self.next(),
            c if c.is_ascii_digit() => Some(self.number(c)),
            c => Some(self.ident(c)),
        }
    }
}
