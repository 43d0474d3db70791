//! 2D projection of word vectors (standardize + PCA)

use anyhow::{bail, Result};
use ndarray::{Array1, Array2, Axis};

use crate::core::Embedding;
use crate::ui;

const POWER_ITERATIONS: usize = 200;
const TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
	pub label: String,
	pub x: f64,
	pub y: f64,
}

/// Project labelled vectors onto their first two principal components
pub fn project(labels: &[String], vectors: &[Embedding]) -> Result<Vec<ProjectedPoint>> {
	if labels.len() != vectors.len() {
		bail!("{} labels but {} vectors", labels.len(), vectors.len());
	}
	if vectors.is_empty() {
		return Ok(Vec::new());
	}

	let n_samples = vectors.len();
	let n_features = vectors[0].dim();
	if vectors.iter().any(|v| v.dim() != n_features) {
		bail!("Cannot project vectors of different dimensions");
	}

	ui::debug(&format!("Projecting {} points from {}D to 2D", n_samples, n_features));

	let mut data = Array2::<f64>::zeros((n_samples, n_features));
	for (i, emb) in vectors.iter().enumerate() {
		for (j, &val) in emb.as_slice().iter().enumerate() {
			data[[i, j]] = val as f64;
		}
	}

	let scaled = standardize(data);
	let scores = principal_scores(&scaled, 2);

	Ok(labels
		.iter()
		.enumerate()
		.map(|(i, label)| ProjectedPoint {
			label: label.clone(),
			x: scores[[i, 0]],
			y: scores[[i, 1]],
		})
		.collect())
}

/// Zero mean, unit variance per column. Constant columns become zero.
fn standardize(mut data: Array2<f64>) -> Array2<f64> {
	for mut column in data.axis_iter_mut(Axis(1)) {
		let mean = column.mean().unwrap_or(0.0);
		let std = column.std(0.0);
		column.mapv_inplace(|v| if std > TOLERANCE { (v - mean) / std } else { 0.0 });
	}
	data
}

/// Principal component scores via power iteration on the Gram matrix.
/// Components with no variance left are all zero.
fn principal_scores(data: &Array2<f64>, n_components: usize) -> Array2<f64> {
	let n_samples = data.nrows();
	let mut gram = data.dot(&data.t());
	let mut scores = Array2::<f64>::zeros((n_samples, n_components));

	for c in 0..n_components {
		let Some((value, vector)) = dominant_eigen(&gram) else {
			break;
		};

		scores.column_mut(c).assign(&(&vector * value.sqrt()));

		// Deflate
		let outer = vector
			.view()
			.insert_axis(Axis(1))
			.dot(&vector.view().insert_axis(Axis(0)));
		gram = gram - outer * value;
	}

	scores
}

fn dominant_eigen(matrix: &Array2<f64>) -> Option<(f64, Array1<f64>)> {
	let n = matrix.nrows();
	if n == 0 {
		return None;
	}

	// Centered rows sum to zero, so a constant start vector would be in the null space
	let mut vector = Array1::from_iter((0..n).map(|i| 1.0 + i as f64 / n as f64));
	let norm = vector.dot(&vector).sqrt();
	vector /= norm;

	let mut value = 0.0;
	for _ in 0..POWER_ITERATIONS {
		let next = matrix.dot(&vector);
		let norm = next.dot(&next).sqrt();
		if norm < TOLERANCE {
			return None;
		}
		let next = next / norm;
		let delta = (&next - &vector).mapv(f64::abs).sum();
		vector = next;
		value = vector.dot(&matrix.dot(&vector));
		if delta < TOLERANCE {
			break;
		}
	}

	if value > TOLERANCE {
		Some((value, vector))
	} else {
		None
	}
}
