use crate::Reflect;

/// A sequence of homogeneous reflected elements.
///
/// # Examples
///
/// ```
/// use fp_reflect::{Reflect, ops::{List, ReflectRef}};
///
/// let v: Vec<u8> = vec![1, 2, 3];
/// let ReflectRef::List(list) = v.reflect_ref() else { unreachable!() };
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(2).unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(list.get(3).is_none());
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably, or `None` when out of range.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
