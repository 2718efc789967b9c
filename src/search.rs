/// Index of the first element equal to `target`, scanning front to back.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}
