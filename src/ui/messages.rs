//! Styled terminal output. Projects are magenta, tasks blue, timestamps
//! green, indices and chart furniture grey.

use ansi_term::Colour;
use std::fmt;

pub fn project<T: fmt::Display>(name: T) -> String {
    Colour::Purple.paint(name.to_string()).to_string()
}

pub fn task<T: fmt::Display>(name: T) -> String {
    Colour::Blue.paint(name.to_string()).to_string()
}

pub fn time<T: fmt::Display>(value: T) -> String {
    Colour::Green.paint(value.to_string()).to_string()
}

pub fn grey<T: fmt::Display>(value: T) -> String {
    Colour::Fixed(8).paint(value.to_string()).to_string()
}

pub fn chart<T: fmt::Display>(value: T) -> String {
    Colour::Green.paint(value.to_string()).to_string()
}
