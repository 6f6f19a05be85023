// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Command name to Unicode tables.
//!
//! Every table is keyed by the whole command name without its backslash, so
//! lookups never match on a prefix of a longer command.

use phf::{phf_map, Map};

static GREEK: Map<&'static str, char> = phf_map! {
    "alpha" => 'α',
    "beta" => 'β',
    "gamma" => 'γ',
    "delta" => 'δ',
    "epsilon" => 'ε',
    "varepsilon" => 'ε',
    "zeta" => 'ζ',
    "eta" => 'η',
    "theta" => 'θ',
    "vartheta" => 'θ',
    "iota" => 'ι',
    "kappa" => 'κ',
    "lambda" => 'λ',
    "mu" => 'μ',
    "nu" => 'ν',
    "xi" => 'ξ',
    "pi" => 'π',
    "varpi" => 'π',
    "rho" => 'ρ',
    "varrho" => 'ρ',
    "sigma" => 'σ',
    "varsigma" => 'ς',
    "tau" => 'τ',
    "upsilon" => 'υ',
    "phi" => 'φ',
    "varphi" => 'φ',
    "chi" => 'χ',
    "psi" => 'ψ',
    "omega" => 'ω',
    "Gamma" => 'Γ',
    "Delta" => 'Δ',
    "Theta" => 'Θ',
    "Lambda" => 'Λ',
    "Xi" => 'Ξ',
    "Pi" => 'Π',
    "Sigma" => 'Σ',
    "Upsilon" => 'Υ',
    "Phi" => 'Φ',
    "Psi" => 'Ψ',
    "Omega" => 'Ω',
};

static OPERATORS: Map<&'static str, char> = phf_map! {
    "pm" => '±',
    "mp" => '∓',
    "times" => '×',
    "div" => '÷',
    "cdot" => '·',
    "ast" => '∗',
    "star" => '⋆',
    "circ" => '∘',
    "bullet" => '•',
    "leq" => '≤',
    "le" => '≤',
    "geq" => '≥',
    "ge" => '≥',
    "neq" => '≠',
    "ne" => '≠',
    "equiv" => '≡',
    "sim" => '∼',
    "approx" => '≈',
    "cong" => '≅',
    "propto" => '∝',
};

static SETS: Map<&'static str, char> = phf_map! {
    "cap" => '∩',
    "cup" => '∪',
    "in" => '∈',
    "notin" => '∉',
    "subset" => '⊂',
    "supset" => '⊃',
    "subseteq" => '⊆',
    "supseteq" => '⊇',
    "emptyset" => '∅',
};

static CALCULUS: Map<&'static str, char> = phf_map! {
    "int" => '∫',
    "iint" => '∬',
    "iiint" => '∭',
    "oint" => '∮',
    "sum" => 'Σ',
    "prod" => 'Π',
    "infty" => '∞',
    "partial" => '∂',
    "nabla" => '∇',
    "forall" => '∀',
    "exists" => '∃',
    "neg" => '¬',
};

static ARROWS: Map<&'static str, char> = phf_map! {
    "rightarrow" => '→',
    "to" => '→',
    "leftarrow" => '←',
    "gets" => '←',
    "leftrightarrow" => '↔',
    "Rightarrow" => '⇒',
    "Leftarrow" => '⇐',
    "Leftrightarrow" => '⇔',
    "mapsto" => '↦',
    "uparrow" => '↑',
    "downarrow" => '↓',
    "updownarrow" => '↕',
};

/// Named functions are typeset upright, so they render as their own name.
static FUNCTIONS: Map<&'static str, &'static str> = phf_map! {
    "sin" => "sin",
    "cos" => "cos",
    "tan" => "tan",
    "cot" => "cot",
    "sec" => "sec",
    "csc" => "csc",
    "arcsin" => "arcsin",
    "arccos" => "arccos",
    "arctan" => "arctan",
    "sinh" => "sinh",
    "cosh" => "cosh",
    "tanh" => "tanh",
    "log" => "log",
    "ln" => "ln",
    "exp" => "exp",
    "max" => "max",
    "min" => "min",
    "lim" => "lim",
    "sup" => "sup",
    "inf" => "inf",
    "det" => "det",
    "gcd" => "gcd",
    "deg" => "deg",
    "dim" => "dim",
    "arg" => "arg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Glyph(char),
    Function(&'static str),
}

fn strip_marker(command: &str) -> &str {
    command.strip_prefix('\\').unwrap_or(command)
}

/// Look up a single-glyph command, e.g. `\alpha` or `alpha`.
pub fn glyph(command: &str) -> Option<char> {
    let name = strip_marker(command);
    [&GREEK, &OPERATORS, &SETS, &CALCULUS, &ARROWS]
        .into_iter()
        .find_map(|table| table.get(name).copied())
}

/// Look up a named function, e.g. `\sin`.
pub fn function(command: &str) -> Option<&'static str> {
    FUNCTIONS.get(strip_marker(command)).copied()
}

pub fn lookup(command: &str) -> Option<Symbol> {
    glyph(command)
        .map(Symbol::Glyph)
        .or_else(|| function(command).map(Symbol::Function))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_share_glyph() {
        assert_eq!(glyph(r"\epsilon"), Some('ε'));
        assert_eq!(glyph(r"\varepsilon"), Some('ε'));
        assert_eq!(glyph("varphi"), glyph("phi"));
    }

    #[test]
    fn test_no_prefix_collision() {
        assert_eq!(glyph(r"\int"), Some('∫'));
        assert_eq!(glyph(r"\in"), Some('∈'));
        assert_eq!(glyph(r"\leftarrow"), Some('←'));
        assert_eq!(glyph(r"\le"), Some('≤'));
    }

    #[test]
    fn test_functions_and_unknown() {
        assert_eq!(lookup(r"\sin"), Some(Symbol::Function("sin")));
        assert_eq!(lookup(r"\sum"), Some(Symbol::Glyph('Σ')));
        assert_eq!(lookup(r"\mathbf"), None);
        assert_eq!(function(r"\alpha"), None);
    }
}
