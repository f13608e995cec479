//! Tests for plugin import and the bundled math plugin

use super::helpers::{build_interpreter, run_in};
use crate::executor::stdlib::math;
use crate::executor::{bundled_plugin, Control, EvalError, Plugin, Val};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_math_plugin() {
    let (mut interp, console) = build_interpreter();
    interp.import(bundled_plugin("math").expect("math plugin missing"));

    let outcome = run_in(
        &mut interp,
        &console,
        r#"[{"FLOOR": 2.7}, {"ABS": -3}, {"ROUND": 2.5}, {"CEIL": 1.1}, {"PI": null}]"#,
    );
    assert_eq!(
        outcome.values(),
        &[
            Val::Num(2.0),
            Val::Num(3.0),
            Val::Num(3.0),
            Val::Num(2.0),
            Val::Num(std::f64::consts::PI),
        ]
    );
}

#[test]
fn test_imported_frames_persist_across_runs() {
    let (mut interp, console) = build_interpreter();
    let plugin = math::plugin();
    let entries = plugin.len();
    interp.import(plugin);
    assert_eq!(interp.stack().len(), entries);

    let outcome = run_in(&mut interp, &console, r#"[{"FLOOR": 1.5}]"#);
    assert_eq!(outcome.values()[0], Val::Num(1.0));
    assert_eq!(outcome.stack_len, entries);
}

#[test]
fn test_native_receives_interpreter() {
    let (mut interp, console) = build_interpreter();
    interp.import(Plugin::new("host").native("APPLY", |interp, args| {
        let mut args = args.into_iter();
        let callee = args
            .next()
            .and_then(|name| name.as_str().and_then(|name| interp.find(name)));
        match callee {
            Some(callee) => interp.call(&callee, args.collect()),
            None => Ok(Control::null()),
        }
    }));

    let outcome = run_in(
        &mut interp,
        &console,
        r#"[
            {"FUNCTION": ["inc1", "n"], "script": [{"RETURN": {"ADD": [{"n": null}, 1]}}]},
            {"APPLY": ["inc1", 41]}
        ]"#,
    );
    assert_eq!(outcome.values()[1], Val::Num(42.0));
}

#[test]
fn test_native_shadows_core_keyword() {
    let (mut interp, console) = build_interpreter();
    let seen = Rc::new(RefCell::new(Vec::<Val>::new()));
    let sink = Rc::clone(&seen);
    interp.import(Plugin::new("host").native("PRINT", move |_, args| {
        sink.borrow_mut().extend(args);
        Ok(Control::null())
    }));

    let outcome = run_in(&mut interp, &console, r#"[{"PRINT": "x"}]"#);
    outcome.values();
    assert!(outcome.lines.is_empty());
    assert_eq!(*seen.borrow(), vec![Val::Str("x".into())]);
}

#[test]
fn test_later_entry_shadows_earlier() {
    let (mut interp, console) = build_interpreter();
    interp.import(
        Plugin::new("values")
            .value("X", Val::Num(1.0))
            .value("X", Val::Num(2.0)),
    );

    let outcome = run_in(&mut interp, &console, r#"[{"X": null}]"#);
    assert_eq!(outcome.values()[0], Val::Num(2.0));
}

#[test]
fn test_local_binding_shadows_plugin_until_scope_ends() {
    let (mut interp, console) = build_interpreter();
    interp.import(math::plugin());

    let outcome = run_in(&mut interp, &console, r#"[{"LET": ["PI", 3]}, {"PI": null}]"#);
    assert_eq!(outcome.values()[1], Val::Num(3.0));

    let outcome = run_in(&mut interp, &console, r#"[{"PI": null}]"#);
    assert_eq!(outcome.values()[0], Val::Num(std::f64::consts::PI));
}

#[test]
fn test_import_from_inside_keyword() {
    let (mut interp, console) = build_interpreter();
    interp.import(Plugin::new("loader").native("LOAD_MATH", |interp, _| {
        interp.import(math::plugin());
        Ok(Control::null())
    }));

    let outcome = run_in(&mut interp, &console, r#"[{"LOAD_MATH": null}, {"FLOOR": 1.5}]"#);
    assert_eq!(outcome.values(), &[Val::Null, Val::Num(1.0)]);

    // Frames pushed during the run belong to its scope
    let outcome = run_in(&mut interp, &console, r#"[{"FLOOR": 1.5}]"#);
    assert_eq!(outcome.values()[0], Val::Str("FLOOR".into()));
}

#[test]
fn test_plugin_native_argument_errors() {
    let (mut interp, console) = build_interpreter();
    interp.import(math::plugin());

    let outcome = run_in(&mut interp, &console, r#"[{"FLOOR": "x"}]"#);
    assert!(matches!(
        outcome.result,
        Err(EvalError::WrongArgType { ref keyword, .. }) if keyword == "FLOOR"
    ));
    assert_eq!(outcome.stack_len, math::plugin().len());
}
