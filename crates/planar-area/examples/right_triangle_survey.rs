//! How often does the exact right-triangle check miss?
//!
//! Draws right triangles two ways: exact integer triples, and the same
//! triples rotated into the plane so the sides pass through `sqrt`. Prints
//! hit rates for the exact and tolerant checks.
//!
//! Run: cargo run -p planar-area --example right_triangle_survey

use planar_area::prelude::*;

fn main() {
    let eps = AreaCfg::default().eps_right;
    let n = 10_000;
    let mut tok = ReplayToken::new(2024, 0);
    let (mut exact_int, mut exact_rot, mut eps_rot) = (0usize, 0usize, 0usize);
    for _ in 0..n {
        let (a, b, c) = draw_right_triangle(tok, 128);
        tok = tok.advance();
        if is_right_triangle(a, b, c) == Ok(true) {
            exact_int += 1;
        }
        // Legs along a rotated frame: vertices p=0, q=x·u, r=y·v with u ⟂ v.
        let (x, y, _) = sorted_sides(a, b, c);
        let th = 0.3 + (tok.index as f64) * 1e-3;
        let u = Vec2::new(th.cos(), th.sin());
        let v = Vec2::new(-th.sin(), th.cos());
        let (sa, sb, sc) = sides_from_vertices(Vec2::zeros(), u * x, v * y);
        if is_right_triangle(sa, sb, sc) == Ok(true) {
            exact_rot += 1;
        }
        if is_right_triangle_eps(sa, sb, sc, eps) == Ok(true) {
            eps_rot += 1;
        }
    }
    println!("integer triples, exact check:   {exact_int}/{n}");
    println!("rotated triples, exact check:   {exact_rot}/{n}");
    println!("rotated triples, eps={eps:e}: {eps_rot}/{n}");
}
