use dyadic::{quotient_to_f64, BigInt, Dyadic, DyadicResult, ExactRing};

fn main() -> DyadicResult<()> {
    println!("=== Canonical Forms ===\n");

    let inputs = ["1", "2", "3", "0.5", "-0.75", "96", "0.1", "0"];
    for input in &inputs {
        match input.parse::<Dyadic>() {
            Ok(value) => println!("  {input:>6} -> {}", value.raw()),
            Err(e) => println!("  Error parsing {input}: {e}"),
        }
    }

    let product = Dyadic::from(6) * Dyadic::from(4);
    println!("\n  6 * 4 = {product} stored as {}", product.raw());

    // Exactness against f64
    println!("\n=== Exact Sums ===\n");

    let tenths: Vec<f64> = vec![0.1; 10];
    let float_sum: f64 = tenths.iter().sum();
    let exact_sum = tenths
        .iter()
        .map(|&v| Dyadic::from_f64(v))
        .sum::<DyadicResult<Dyadic>>()?;
    println!("  ten copies of 0.1, summed in f64:   {float_sum}");
    println!("  ten copies of 0.1, summed exactly:  {}", exact_sum.raw());
    println!("  exact sum rounded once to f64:      {}", exact_sum.to_f64());

    let terms = [1e16, 0.1, -1e16];
    let float_total: f64 = terms.iter().sum();
    let exact_total = terms
        .iter()
        .map(|&v| Dyadic::from_f64(v))
        .sum::<DyadicResult<Dyadic>>()?;
    println!("\n  1e16 + 0.1 - 1e16 in f64:  {float_total}");
    println!("  1e16 + 0.1 - 1e16 exactly: {exact_total}");

    // Orientation of three nearly collinear points
    println!("\n=== Orientation Predicate ===\n");

    let points = [(0.5, 0.5), (12.0, 12.0), (24.0, 24.000_000_000_000_004)];
    let float_det = orient_f64(points);
    let mut exact_points = Vec::with_capacity(3);
    for (x, y) in points {
        exact_points.push((Dyadic::from_f64(x)?, Dyadic::from_f64(y)?));
    }
    let exact_det = orient(&exact_points);
    println!("  f64 determinant:   {float_det:e}");
    println!("  exact determinant: {} ({})", exact_det, exact_det.raw());
    println!("  exact sign:        {:?}", exact_det.sign());

    // Division and roots
    println!("\n=== Division and Roots ===\n");

    let a = Dyadic::from(-27) * Dyadic::from_parts(BigInt::from(1), -1);
    let b = Dyadic::from_parts(BigInt::from(3), -2);
    println!("  {a} exact_division {b} = {}", a.exact_division(&b));
    println!("  {} / {} = {}", Dyadic::from(17), Dyadic::from(5), Dyadic::from(17) / 5);
    println!("  {} % {} = {}", Dyadic::from(17), Dyadic::from(5), Dyadic::from(17) % 5);
    match quotient_to_f64(&Dyadic::from(1), &Dyadic::from(3)) {
        Ok(q) => println!("  1 / 3 as f64 = {q}"),
        Err(e) => println!("  1 / 3 failed: {e}"),
    }

    for n in [16, 10, 15] {
        let value = Dyadic::from(n);
        println!(
            "  sqrt({n}) = {} (exact: {:?})",
            value.sqrt(),
            value.exact_sqrt().map(|r| r.to_string())
        );
    }

    // Errors
    println!("\n=== Errors ===\n");

    for bad in [f64::INFINITY, f64::NAN] {
        if let Err(e) = Dyadic::from_f64(bad) {
            println!("  from_f64({bad}): {e}");
        }
    }
    if let Err(e) = Dyadic::from(1).checked_div(&Dyadic::zero()) {
        println!("  1 / 0: {e}");
    }
    if let Err(e) = Dyadic::from(-4).try_sqrt() {
        println!("  sqrt(-4): {e}");
    }
    if let Err(e) = "1.5.2".parse::<Dyadic>() {
        println!("  parse(\"1.5.2\"): {e}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn orient<T: ExactRing>(points: &[(T, T)]) -> T {
    let [(ax, ay), (bx, by), (cx, cy)] = points else {
        return T::zero();
    };
    (bx.clone() - ax.clone()) * (cy.clone() - ay.clone())
        - (by.clone() - ay.clone()) * (cx.clone() - ax.clone())
}

fn orient_f64(points: [(f64, f64); 3]) -> f64 {
    let [(ax, ay), (bx, by), (cx, cy)] = points;
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}
