use dsa::prelude::*;

#[test]
fn test_every_sort_on_demo_input() {
    for algorithm in Algorithm::ALL {
        let mut arr = [40, 20, 50, 60, 30, 10];
        algorithm.sort(&mut arr);
        assert_eq!(arr, [10, 20, 30, 40, 50, 60], "{algorithm}");
    }

    let mut arr: [u32; 6] = [40, 20, 50, 60, 30, 10];
    radix_sort(&mut arr);
    assert_eq!(arr, [10, 20, 30, 40, 50, 60]);
}

#[test]
fn test_radix_demo_input() {
    let mut arr: [u32; 8] = [170, 45, 75, 90, 802, 24, 2, 66];
    radix_sort(&mut arr);
    assert_eq!(arr, [2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn test_binary_search_demo_input() {
    let arr: Vec<i32> = (1..=10).collect();
    assert_eq!(binary_search(&arr, &7), Some(6));
    assert_eq!(binary_search_recursive(&arr, &7), Some(6));
}

#[test]
fn test_bounded_stack_demo() {
    let mut stack = ArrayStack::with_capacity(10);
    for value in [10, 20, 30, 40, 50] {
        stack.push(value).unwrap();
    }

    assert_eq!(stack.pop(), Some(50));
    assert_eq!(stack.pop(), Some(40));
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_linked_stack_search_demo() {
    let mut stack = LinkedStack::new();
    for value in [10, 20, 30] {
        stack.push(value).unwrap();
    }

    assert_eq!(stack.search(&20), Some(1));
    assert_eq!(stack.search(&100), None);
}

#[test]
fn test_linked_stack_underflow_demo() {
    let mut stack: LinkedStack<i32> = LinkedStack::new();
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_sorted_input_is_unchanged() {
    let sorted = [-4, -4, 0, 3, 3, 9, 12];
    for algorithm in Algorithm::ALL {
        let mut arr = sorted;
        algorithm.sort(&mut arr);
        assert_eq!(arr, sorted, "{algorithm}");
    }
}
