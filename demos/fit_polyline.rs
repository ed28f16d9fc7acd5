//! Fits a few picked points and prints the resampled curve.

use arclength_splines::prelude::*;

fn main() {
    println!("=== Curve Fitting Example ===\n");

    let picked = [
        [0.0, 0.0, 0.0],
        [4.0, 1.0, 0.0],
        [6.0, 4.0, 1.0],
        [5.0, 8.0, 2.0],
    ];

    // Example 1: Natural cubic spline resampled every 1.5 units
    println!("Natural cubic, spacing 1.5:");
    let curve = fit_curve(&picked, &FitOptions::new(1.5)).unwrap();
    for p in &curve {
        println!("  ({:7.3}, {:7.3}, {:7.3})", p[0], p[1], p[2]);
    }

    // Example 2: The same points as a closed loop with not-a-knot ends
    // (the wrap equations take precedence)
    println!("\nClosed loop:");
    let options = FitOptions::new(1.5)
        .with_boundary(BoundaryCondition::NotAKnot)
        .with_closed(true);
    let spline = fit_spline(&picked, &options).unwrap();
    println!(
        "  {} segments of degree {}, length {:.3}",
        spline.segment_count(),
        spline.degree(),
        spline.length()
    );
    for t in [0.0, spline.length() / 3.0, spline.length() * 2.0 / 3.0] {
        let p = spline.point_at(t);
        println!(
            "  point_at({:.3}) = ({:.3}, {:.3}, {:.3})",
            t, p[0], p[1], p[2]
        );
    }

    // Example 3: Piecewise linear fit with collinear points removed
    println!("\nLinear, simplified:");
    let options = FitOptions::new(0.5)
        .with_degree(NonZeroUsize::MIN)
        .with_simplification(Simplification::Linear);
    for p in fit_curve(&picked, &options).unwrap() {
        println!("  ({:.3}, {:.3}, {:.3})", p[0], p[1], p[2]);
    }

    // Example 4: Error handling
    println!("\nError handling:");
    match fit_curve(&[[1.0, 2.0, 3.0]], &FitOptions::new(1.0)) {
        Ok(curve) => println!("  Result: {} points", curve.len()),
        Err(e) => println!("  Error: {}", e),
    }
}
