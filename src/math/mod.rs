// Copyright (c) 2025 Mathdown Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Mathdown contributors

//! Fallback Unicode rendering for the LaTeX math subset.
//!
//! Used where no equation renderer is available: the output is plain text
//! that reads like the formula, e.g. `\frac{1}{2} x_1^2` becomes `½ x₁²`.
//! Rendering is total and never fails; unknown commands are dropped.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod script;
pub mod symbol;

/// Deepest brace or argument nesting that is parsed; anything deeper is kept
/// as literal source text.
pub const MAX_NESTING: usize = 32;

pub fn render(expr: &str) -> String {
    let nodes = parser::parse(expr);
    render::render_nodes(&nodes)
}

/// Render a multi-row expression (rows separated by `\\`), skipping blank rows.
pub fn render_rows(expr: &str) -> Vec<String> {
    let nodes = parser::parse(expr);
    render::split_rows(&nodes)
        .map(render::render_nodes)
        .filter(|row| !row.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_fractions() {
        assert_eq!(render(r"\frac{1}{2}"), "½");
        assert_eq!(render(r"x + \frac{3}{4}y"), "x + ¾y");
        assert_eq!(render(r"\frac{7}{8}\frac{1}{3}"), "⅞⅓");
        // only the braced literal form is a unit fraction
        assert_eq!(render(r"\frac12"), "(1)/(2)");
        assert_eq!(render(r"\frac{1}{7}"), "(1)/(7)");
    }

    #[test]
    fn test_general_fractions() {
        assert_eq!(render(r"\frac{a+b}{c}"), "(a+b)/(c)");
        assert_eq!(render(r"\frac{x^2}{\alpha}"), "(x²)/(α)");
        assert_eq!(render(r"\frac{\frac{a}{b}}{c}"), "((a)/(b))/(c)");
        assert_eq!(render(r"\frac{\frac{\frac{1}{x}}{y}}{z}"), "(((1)/(x))/(y))/(z)");
        assert_eq!(render(r"\dfrac{ a }{b}"), "(a)/(b)");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(render("x^2"), "x²");
        assert_eq!(render("x_{1}"), "x₁");
        assert_eq!(render("A_1^2"), "A₁²");
        assert_eq!(render("A^2_1"), "A₁²");
        assert_eq!(render("B_{12}"), "B₁₂");
        assert_eq!(render("x^2 + y^2"), "x² + y²");
        assert_eq!(render("x^{n+1}"), "xⁿ⁺¹");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(render(r"\alpha + \beta"), "α + β");
        assert_eq!(render(r"a \leq b \neq c"), "a ≤ b ≠ c");
        assert_eq!(render(r"\int_0^1 f"), "∫₀¹ f");
        assert_eq!(render(r"x \in A \cup B"), "x ∈ A ∪ B");
        assert_eq!(render(r"f: A \to B"), "f: A → B");
        assert_eq!(render(r"\sin x + \log y"), "sin x + log y");
    }

    #[test]
    fn test_sum_with_limits() {
        assert_eq!(render(r"\sum_{i=1}^{n} i"), "Σᵢ₌₁ⁿ i");
    }

    #[test]
    fn test_unknown_commands_dropped() {
        assert_eq!(render(r"\nabla \cdot \mathbf{E}"), "∇ · E");
        assert_eq!(render(r"\left( x \right)"), "( x )");
        assert_eq!(render(r"\{a\}"), "{a}");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(render("  a   +\n b  "), "a + b");
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_euler_identity() {
        let out = render(r"e^{i\pi}+1=0");
        assert!(out.contains('π'));
        assert!(out.contains("=0"));
    }

    #[test]
    fn test_malformed_never_fails() {
        assert_eq!(render("x^"), "x^");
        assert_eq!(render("a}b"), "a}b");
        assert_eq!(render(r"\frac{1}"), "(1)/()");
        assert_eq!(render("\\"), "");
    }

    #[test]
    fn test_long_script_chain() {
        let out = render(&format!("a{}", "_1".repeat(20_000)));
        assert_eq!(out, format!("a{}", "₁".repeat(20_000)));

        let out = render(&format!("x{}", "^{2}".repeat(20_000)));
        assert_eq!(out.chars().count(), 20_001);
    }

    #[test]
    fn test_rows() {
        assert_eq!(render_rows(r"a = 1 \\ b = 2 \\"), vec!["a = 1", "b = 2"]);
        assert_eq!(render_rows("x^2"), vec!["x²"]);
    }
}
