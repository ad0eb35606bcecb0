use crate::models::model::Model;

/// Maximum Euclidean distance between any two atoms of the model, in
/// Angstroms, across all chains.
///
/// Exact O(n²) scan over every unordered atom pair: squared distances are
/// compared in the loop and the square root is taken once at the end. A
/// model with zero or one atom has diameter 0. Multi-model structures are
/// queried one model at a time; results are independent.
pub fn diameter(model: &Model) -> f64 {
    let positions: Vec<_> = model.atoms().map(|atom| atom.position).collect();

    let mut max_squared = 0.0f64;
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            let squared = (a - b).norm_squared();
            if squared > max_squared {
                max_squared = squared;
            }
        }
    }

    max_squared.sqrt()
}
