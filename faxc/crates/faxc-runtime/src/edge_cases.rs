//! Edge case tests for faxc-runtime

#[cfg(test)]
mod tests {
    use crate::output::write_items;
    use crate::{array, Array, Ptr, RuntimeError};
    use std::fmt::Display;

    fn render(items: &[&dyn Display]) -> String {
        let mut buf = Vec::new();
        write_items(&mut buf, items).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ==================== ARRAY ====================

    #[test]
    fn test_edge_index_at_length() {
        let arr = array![1, 2, 3];
        assert!(arr.get(arr.len()).is_err());
    }

    #[test]
    fn test_edge_max_indices() {
        let arr = array![0u8];
        assert_eq!(
            arr.get(usize::MAX).unwrap_err(),
            RuntimeError::IndexOutOfRange {
                index: usize::MAX as i128,
                len: 1
            }
        );
        assert!(arr.get(i64::MIN).is_err());
        assert!(arr.get(u64::MAX).is_err());
    }

    #[test]
    fn test_edge_index_after_pop() {
        let mut arr = array![1, 2];
        arr.pop();
        assert!(arr.get(1usize).is_err());
        assert_eq!(arr[0usize], 1);
    }

    #[test]
    fn test_edge_index_after_clear() {
        let mut arr = array!["a", "b"];
        arr.clear();
        assert!(arr.get(0usize).is_err());
    }

    #[test]
    fn test_edge_duplicates_kept() {
        let arr = array![7, 7, 7];
        assert_eq!(arr.len(), 3);
        assert!(arr.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_edge_zero_sized_elements() {
        let arr: Array<()> = Array::with_len(1000);
        assert_eq!(arr.len(), 1000);
        assert!(arr.get(999usize).is_ok());
        assert!(arr.get(1000usize).is_err());
    }

    #[test]
    fn test_edge_nested_arrays() {
        let mut grid: Array<Array<i32>> = Array::from_elem(Array::from_elem(0, 2), 2);
        grid[1usize][0usize] = 5;
        assert_eq!(grid[1usize][0usize], 5);
        assert_eq!(grid[0usize][0usize], 0);
        assert!(grid[0usize].get(2usize).is_err());
    }

    #[test]
    fn test_edge_slice_of_empty() {
        let arr: Array<i32> = Array::new();
        assert!(arr.slice(0usize, 0usize).unwrap().is_empty());
        assert!(arr.slice(0usize, 1usize).is_err());
    }

    // ==================== PTR ====================

    #[test]
    fn test_edge_ptr_to_array_element() {
        let mut arr = array![1, 2, 3];
        {
            let mut p = Ptr::from_ref(arr.get_mut(2usize).unwrap());
            *p = 30;
        }
        assert_eq!(arr[2usize], 30);
    }

    #[test]
    fn test_edge_ptr_to_zero_sized() {
        let mut unit = ();
        let p = Ptr::from_ref(&mut unit);
        assert!(!p.is_null());
        assert!(p.try_get().is_ok());
    }

    #[test]
    fn test_edge_ptr_reset_after_take() {
        let mut a = 1;
        let mut b = 2;
        let mut p = Ptr::from_ref(&mut a);
        assert!(p.take().is_some());
        assert!(p.try_get().is_err());
        p.set(&mut b);
        assert_eq!(*p, 2);
    }

    // ==================== OUTPUT ====================

    #[test]
    fn test_edge_item_with_spaces() {
        assert_eq!(render(&[&"a b", &"c"]), "a b c\n");
    }

    #[test]
    fn test_edge_item_with_newline() {
        assert_eq!(render(&[&"x\ny"]), "x\ny\n");
    }

    #[test]
    fn test_edge_many_items() {
        let values: Vec<i32> = (0..100).collect();
        let items: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
        let line = render(&items);
        assert_eq!(line.matches(' ').count(), 99);
        assert!(line.ends_with("99\n"));
    }

    #[test]
    fn test_edge_float_formatting() {
        assert_eq!(render(&[&3.0f64, &-0.5f32]), "3 -0.5\n");
    }
}
