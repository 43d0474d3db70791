//! Word vectors

use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Neg, Sub};

/// Raw (unnormalized) embedding vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding(pub Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	pub fn norm(&self) -> f32 {
		self.0.iter().map(|x| x * x).sum::<f32>().sqrt()
	}

	/// Component-wise sum. Returns `None` for an empty input.
	pub fn sum<'a, I>(vectors: I) -> Option<Self>
	where
		I: IntoIterator<Item = &'a Embedding>,
	{
		let mut iter = vectors.into_iter();
		let mut total = iter.next()?.clone();
		for v in iter {
			total += v;
		}
		Some(total)
	}

	/// Cosine similarity [-1.0, 1.0]; zero vectors are orthogonal to everything
	pub fn similarity(&self, other: &Self) -> f32 {
		cosine_similarity(&self.0, &other.0)
	}

	/// Cosine distance [0.0, 2.0]
	pub fn distance(&self, other: &Self) -> f32 {
		1.0 - self.similarity(other)
	}
}

impl Neg for &Embedding {
	type Output = Embedding;

	fn neg(self) -> Embedding {
		Embedding(self.0.iter().map(|x| -x).collect())
	}
}

impl Neg for Embedding {
	type Output = Embedding;

	fn neg(mut self) -> Embedding {
		self.0.iter_mut().for_each(|x| *x = -*x);
		self
	}
}

impl AddAssign<&Embedding> for Embedding {
	fn add_assign(&mut self, rhs: &Embedding) {
		for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
			*a += b;
		}
	}
}

impl Sub<&Embedding> for &Embedding {
	type Output = Embedding;

	fn sub(self, rhs: &Embedding) -> Embedding {
		Embedding(self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a - b).collect())
	}
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
	if norm_a > 0.0 && norm_b > 0.0 {
		dot / (norm_a * norm_b)
	} else {
		0.0
	}
}
