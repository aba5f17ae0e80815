//! Triangle facet: three vertex indices plus a cached normal.

use nalgebra::{Scalar, Vector3};
use num_traits::Zero;
use std::ops::{Index, IndexMut};

/// A triangular mesh facet: three vertex indices and a cached surface normal.
///
/// The indices identify vertices in an external container this type never
/// sees, so nothing is validated: repeated indices and indices beyond any
/// container's length are accepted silently. Validation is the owning mesh's
/// responsibility.
///
/// Equality is topological. Two facets are equal when every index of the
/// right-hand facet is present among the left-hand facet's indices, which
/// for facets with three pairwise-distinct indices means "same three
/// vertices, any winding order". With a repeated index the membership test
/// can disagree with multiset equality and can even be asymmetric, so `Eq`
/// and `Hash` are not implemented. The normal never participates in
/// equality.
///
/// # Example
///
/// ```
/// use facet_types::Facet;
///
/// let facet: Facet<u32, f64> = Facet::new(0, 1, 2);
/// assert!(facet.has(1));
/// assert!(!facet.has(7));
/// assert_eq!(facet, Facet::new(2, 0, 1));
/// assert_ne!(facet, Facet::new(0, 1, 3));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facet<I, T: Scalar> {
    indices: [I; 3],
    normal: Vector3<T>,
}

impl<I, T: Scalar> Facet<I, T> {
    /// Creates a facet from three vertex indices, with a zero normal.
    ///
    /// The indices are stored as given; positions 0, 1, 2 receive `a`, `b`,
    /// `c` respectively.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::{Facet, Vector3};
    ///
    /// let facet: Facet<u32, f64> = Facet::new(3, 1, 4);
    /// assert_eq!(facet.as_array(), [3, 1, 4]);
    /// assert_eq!(facet.normal(), Vector3::zeros());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(a: I, b: I, c: I) -> Self
    where
        T: Zero,
    {
        Self {
            indices: [a, b, c],
            normal: Vector3::zeros(),
        }
    }

    /// Creates a facet from three vertex indices and a precomputed normal.
    ///
    /// The normal is opaque payload: it is stored exactly as supplied and
    /// never recomputed or normalized here.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::{Facet, Vector3};
    ///
    /// let facet = Facet::with_normal(0_u32, 1, 2, Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(facet.normal(), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_normal(a: I, b: I, c: I, normal: Vector3<T>) -> Self {
        Self {
            indices: [a, b, c],
            normal,
        }
    }

    /// Overwrites all three indices, as unchecked as construction.
    ///
    /// The normal is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::{Facet, Vector3};
    ///
    /// let mut facet = Facet::with_normal(0_u32, 1, 2, Vector3::new(1.0, 0.0, 0.0));
    /// facet.set(5, 6, 7);
    /// assert_eq!(facet.as_array(), [5, 6, 7]);
    /// assert_eq!(facet.normal(), Vector3::new(1.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn set(&mut self, a: I, b: I, c: I) {
        self.indices = [a, b, c];
    }

    /// Returns true when `index` equals one of the three stored indices.
    ///
    /// At most three comparisons, short-circuiting on the first match.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::Facet;
    ///
    /// let facet: Facet<u32, f64> = Facet::new(1, 2, 3);
    /// assert!(facet.has(2));
    /// assert!(!facet.has(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn has(&self, index: I) -> bool
    where
        I: Copy + PartialEq,
    {
        self.indices[0] == index || self.indices[1] == index || self.indices[2] == index
    }

    /// The stored surface normal.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        self.normal.clone()
    }

    /// Mutable access to the stored normal, for in-place updates after the
    /// caller recomputes it from vertex positions.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::{Facet, Vector3};
    ///
    /// let mut facet: Facet<u32, f64> = Facet::new(0, 1, 2);
    /// *facet.normal_mut() = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(facet.normal(), Vector3::new(0.0, 1.0, 0.0));
    /// ```
    #[inline]
    pub fn normal_mut(&mut self) -> &mut Vector3<T> {
        &mut self.normal
    }

    /// The three indices as an array, in positional order.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> [I; 3]
    where
        I: Copy,
    {
        self.indices
    }

    /// Iterates the indices in positional order 0, 1, 2.
    ///
    /// # Example
    ///
    /// ```
    /// use facet_types::Facet;
    ///
    /// let facet: Facet<u32, f64> = Facet::new(8, 6, 7);
    /// let collected: Vec<u32> = facet.iter().copied().collect();
    /// assert_eq!(collected, vec![8, 6, 7]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.indices.iter()
    }
}

/// Topological equality: every right-hand index must be present among the
/// left-hand indices. Sound as set equality only while each facet's own
/// indices are pairwise distinct.
impl<I: PartialEq, T: Scalar> PartialEq for Facet<I, T> {
    fn eq(&self, other: &Self) -> bool {
        other.indices.iter().all(|index| self.indices.contains(index))
    }
}

impl<I: Default, T: Scalar + Zero> Default for Facet<I, T> {
    fn default() -> Self {
        Self::new(I::default(), I::default(), I::default())
    }
}

impl<I, T: Scalar> Index<usize> for Facet<I, T> {
    type Output = I;

    #[inline]
    fn index(&self, position: usize) -> &I {
        &self.indices[position]
    }
}

impl<I, T: Scalar> IndexMut<usize> for Facet<I, T> {
    #[inline]
    fn index_mut(&mut self, position: usize) -> &mut I {
        &mut self.indices[position]
    }
}

impl<I, T: Scalar> IntoIterator for Facet<I, T> {
    type Item = I;
    type IntoIter = std::array::IntoIter<I, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}

impl<'a, I, T: Scalar> IntoIterator for &'a Facet<I, T> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

impl<I, T: Scalar + Zero> From<[I; 3]> for Facet<I, T> {
    fn from(indices: [I; 3]) -> Self {
        let [a, b, c] = indices;
        Self::new(a, b, c)
    }
}

impl<I, T: Scalar + Zero> From<(I, I, I)> for Facet<I, T> {
    fn from((a, b, c): (I, I, I)) -> Self {
        Self::new(a, b, c)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equality_ignores_winding_order() {
        let base: Facet<u32, f64> = Facet::new(4, 7, 9);
        let permutations = [
            [4, 7, 9],
            [4, 9, 7],
            [7, 4, 9],
            [7, 9, 4],
            [9, 4, 7],
            [9, 7, 4],
        ];

        for permutation in permutations {
            let facet = Facet::<u32, f64>::from(permutation);
            assert_eq!(base, facet);
            assert_eq!(facet, base);
        }
    }

    #[test]
    fn equality_rejects_a_differing_vertex() {
        let facet: Facet<u32, f64> = Facet::new(1, 2, 3);
        let other: Facet<u32, f64> = Facet::new(1, 2, 4);

        assert_ne!(facet, other);
        assert_ne!(other, facet);
    }

    #[test]
    fn inequality_is_negated_equality() {
        let facet: Facet<u32, f64> = Facet::new(1, 2, 3);
        let same: Facet<u32, f64> = Facet::new(3, 1, 2);
        let different: Facet<u32, f64> = Facet::new(1, 2, 4);

        assert_eq!(facet == same, !(facet != same));
        assert_eq!(facet == different, !(facet != different));
    }

    #[test]
    fn has_matches_only_stored_indices() {
        let facet: Facet<u32, f64> = Facet::new(1, 2, 3);

        assert!(facet.has(1));
        assert!(facet.has(2));
        assert!(facet.has(3));
        assert!(!facet.has(0));
        assert!(!facet.has(4));
    }

    #[test]
    fn has_accepts_repeated_and_out_of_range_indices() {
        // Construction performs no validation; `has` just reports storage.
        let facet: Facet<u32, f64> = Facet::new(5, 5, 1_000_000);

        assert!(facet.has(5));
        assert!(facet.has(1_000_000));
        assert!(!facet.has(6));
    }

    #[test]
    fn default_facet_has_zero_normal() {
        let facet: Facet<u32, f64> = Facet::default();
        assert_eq!(facet.normal(), Vector3::zeros());

        let constructed: Facet<u32, f64> = Facet::new(1, 2, 3);
        assert_eq!(constructed.normal(), Vector3::zeros());
    }

    #[test]
    fn supplied_normal_is_stored_exactly() {
        let normal = Vector3::new(0.1, -2.5, 7.25);
        let facet = Facet::with_normal(0_u32, 1, 2, normal);

        assert_eq!(facet.normal(), normal);
    }

    #[test]
    fn normal_mutation_is_visible_on_read() {
        let mut facet: Facet<u32, f64> = Facet::new(0, 1, 2);

        *facet.normal_mut() = Vector3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(facet.normal(), Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);

        facet.normal_mut().z = -1.0;
        assert_relative_eq!(facet.normal().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn set_overwrites_indices_and_keeps_normal() {
        let normal = Vector3::new(1.0, 0.0, 0.0);
        let mut facet = Facet::with_normal(9_u32, 8, 7, normal);

        facet.set(1, 2, 3);

        assert_eq!(facet[0], 1);
        assert_eq!(facet[1], 2);
        assert_eq!(facet[2], 3);
        assert_eq!(facet.normal(), normal);
    }

    #[test]
    fn positional_access_follows_storage_order() {
        let facet: Facet<u32, f64> = Facet::new(8, 6, 7);

        assert_eq!(facet.as_array(), [8, 6, 7]);
        assert_eq!(facet[0], 8);
        assert_eq!(facet[1], 6);
        assert_eq!(facet[2], 7);

        let by_ref: Vec<u32> = facet.iter().copied().collect();
        assert_eq!(by_ref, vec![8, 6, 7]);

        let by_value: Vec<u32> = facet.into_iter().collect();
        assert_eq!(by_value, vec![8, 6, 7]);
    }

    #[test]
    fn positional_writes_update_single_indices() {
        let mut facet: Facet<u32, f64> = Facet::new(1, 2, 3);

        facet[1] = 9;

        assert_eq!(facet.as_array(), [1, 9, 3]);
        assert!(facet.has(9));
        assert!(!facet.has(2));
    }

    #[test]
    fn repeated_indices_compare_by_membership_not_multiset() {
        // Records the lenient contract: with a repeated index the membership
        // test sees only the index *set*, so these two compare equal even
        // though their index multisets differ.
        let one_one_two: Facet<u32, f64> = Facet::new(1, 1, 2);
        let one_two_two: Facet<u32, f64> = Facet::new(1, 2, 2);

        assert_eq!(one_one_two, one_two_two);
        assert_eq!(one_two_two, one_one_two);

        // When only one side repeats an index the relation is asymmetric:
        // every index of (1,1,2) occurs in (1,2,3), but 3 has no match.
        let one_two_three: Facet<u32, f64> = Facet::new(1, 2, 3);

        assert!(one_two_three == one_one_two);
        assert!(one_one_two != one_two_three);
    }

    #[test]
    fn converts_from_arrays_and_tuples() {
        let from_array = Facet::<u32, f64>::from([1, 2, 3]);
        let from_tuple = Facet::<u32, f64>::from((3, 1, 2));

        assert_eq!(from_array.as_array(), [1, 2, 3]);
        assert_eq!(from_tuple.as_array(), [3, 1, 2]);
        assert_eq!(from_array, from_tuple);
        assert_eq!(from_array.normal(), Vector3::zeros());
    }

    #[test]
    fn supports_narrow_index_and_scalar_types() {
        let mut facet: Facet<u16, f32> = Facet::new(1, 2, 3);

        assert!(facet.has(3));
        assert_eq!(facet.normal(), Vector3::zeros());

        facet.set(3, 2, 1);
        assert_eq!(facet.as_array(), [3, 2, 1]);
    }
}
