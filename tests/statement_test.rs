mod common;
use bitwise::lang::MAX_DEPTH;
use bitwise::mach::Runtime;
use common::*;

#[test]
fn test_scenario_a() {
    assert_eq!(eval("x = 101\ny = 011\nprint x and y"), "1\n");
}

#[test]
fn test_scenario_b() {
    assert_eq!(eval("print (1 or 0) xor 1"), "0\n");
}

#[test]
fn test_scenario_c() {
    assert_eq!(
        eval("z = z"),
        "Runtime Error: Variable z doesn't exist at line 1 char 6\n"
    );
}

#[test]
fn test_scenario_d() {
    assert_eq!(
        eval("x = "),
        "Parse Error: Expected atom, got end of input at line 1 char 5\n"
    );
}

#[test]
fn test_print_any_case() {
    assert_eq!(eval("PRINT 1 Print 10 pRiNt 11"), "1\n10\n11\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(eval(""), "");
    assert_eq!(eval(" \n\t "), "");
}

#[test]
fn test_assignment_overwrites() {
    assert_eq!(eval("x = 1 print x x = 10 print x"), "1\n10\n");
}

#[test]
fn test_output_before_failure_is_kept() {
    assert_eq!(
        eval("print 1\nprint y\nprint 11"),
        "1\nRuntime Error: Variable y doesn't exist at line 3 char 1\n"
    );
    assert_eq!(
        eval("print 1\nprint 10 print (\n"),
        "1\n10\nParse Error: Expected atom, got end of input at line 3 char 1\n"
    );
}

#[test]
fn test_variables_survive_enter() {
    let mut r = Runtime::default();
    r.enter("x = 1100");
    assert_eq!(exec(&mut r), "");
    r.enter("print x xor 1010");
    assert_eq!(exec(&mut r), "110\n");
    r.enter("print q");
    assert_eq!(
        exec(&mut r),
        "Runtime Error: Variable q doesn't exist at line 1 char 8\n"
    );
    r.enter("print x");
    assert_eq!(exec(&mut r), "1100\n");
}

#[test]
fn test_recognize_only() {
    assert_eq!(check("x = 101\ny = 011\nprint x and y"), "Parsed successfully\n");
    assert_eq!(check("print undefined"), "Parsed successfully\n");
    assert_eq!(check(""), "Parsed successfully\n");
    assert_eq!(
        check("x = "),
        "Parse Error: Expected atom, got end of input at line 1 char 5\n"
    );
}

fn with_stack<F: FnOnce() + Send + 'static>(f: F) {
    std::thread::Builder::new()
        .stack_size(8 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_long_operator_chain() {
    with_stack(|| {
        let source = format!("print 1{}", " xor 1".repeat(200_000));
        assert_eq!(eval(&source), "1\n");
        assert_eq!(check(&source), "Parsed successfully\n");
    });
}

#[test]
fn test_deepest_grouping() {
    with_stack(|| {
        let source = format!(
            "print {}1 or 0{}",
            "(1 and ".repeat(MAX_DEPTH),
            ")".repeat(MAX_DEPTH)
        );
        assert_eq!(eval(&source), "1\n");
        assert_eq!(check(&source), "Parsed successfully\n");
    });
}
