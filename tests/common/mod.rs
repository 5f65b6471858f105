#![allow(dead_code)]
use bitwise::mach::{Event, Mode, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
    }
    s
}

pub fn eval(source: &str) -> String {
    let mut r = Runtime::default();
    r.enter(source);
    exec(&mut r)
}

pub fn check(source: &str) -> String {
    let mut r = Runtime::new(Mode::Recognize);
    r.enter(source);
    exec(&mut r)
}
