pub mod runtime {
    use std::{fmt, rc::Rc};

    use thiserror::Error;

    pub type Number = i64;

    pub type MelodyResult<T> = Result<T, MelodyError>;

    #[derive(Error, Debug)]
    pub enum MelodyError {
        #[error("Function '{0}' is not defined in this scope.")]
        UndefinedFunction(String),

        #[error("Variable '{0}' is not defined in this scope.")]
        UndefinedVariable(String),

        #[error("'{name}' expected {expected} argument(s) but received {received}.")]
        WrongArity {
            name: String,
            expected: usize,
            received: usize,
        },

        #[error("{0}")]
        WrongValue(String),

        #[error("Integer overflow in '{0}'.")]
        Overflow(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// The category a value reports when introspected
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ValueKind {
        Number,
        List,
        Function,
    }

    impl ValueKind {
        pub fn name(&self) -> &'static str {
            match self {
                ValueKind::Number => "number",
                ValueKind::List => "list",
                ValueKind::Function => "function",
            }
        }
    }

    impl fmt::Display for ValueKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<type '{}'>", self.name())
        }
    }

    #[derive(Debug, Clone)]
    pub enum MelodyValue {
        Number(Number),
        List(Vec<MelodyValue>),
        Function(Rc<dyn MelodyFunction>),
    }

    impl MelodyValue {
        pub fn function(func: impl MelodyFunction + 'static) -> Self {
            MelodyValue::Function(Rc::new(func))
        }

        pub fn kind(&self) -> ValueKind {
            match self {
                MelodyValue::Number(_) => ValueKind::Number,
                MelodyValue::List(_) => ValueKind::List,
                MelodyValue::Function(_) => ValueKind::Function,
            }
        }

        pub fn as_integer(&self) -> Option<Number> {
            if let MelodyValue::Number(n) = self {
                Some(*n)
            } else {
                None
            }
        }

        pub fn as_list(&self) -> Option<&[MelodyValue]> {
            if let MelodyValue::List(items) = self {
                Some(items)
            } else {
                None
            }
        }

        pub fn as_function(&self) -> Option<&Rc<dyn MelodyFunction>> {
            if let MelodyValue::Function(func) = self {
                Some(func)
            } else {
                None
            }
        }

        /// Apply this value as a function
        pub fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            match self {
                MelodyValue::Function(func) => func.call(args),
                other => Err(MelodyError::WrongValue(format!(
                    "{} cannot be called.",
                    other.kind()
                ))),
            }
        }
    }

    impl PartialEq for MelodyValue {
        fn eq(&self, other: &Self) -> bool {
            match (self, other) {
                (MelodyValue::Number(a), MelodyValue::Number(b)) => a == b,
                (MelodyValue::List(a), MelodyValue::List(b)) => a == b,
                (MelodyValue::Function(a), MelodyValue::Function(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
        }
    }

    impl From<Number> for MelodyValue {
        fn from(n: Number) -> Self {
            MelodyValue::Number(n)
        }
    }

    impl fmt::Display for MelodyValue {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                MelodyValue::Number(n) => write!(f, "{n}"),
                MelodyValue::List(items) => {
                    write!(f, "[")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    write!(f, "]")
                }
                MelodyValue::Function(func) => write!(f, "<function {}>", func.get_name()),
            }
        }
    }

    /// A callable value. Both named functions and closures end up behind this trait.
    pub trait MelodyFunction: fmt::Debug {
        fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue>;

        fn get_name(&self) -> &str;
    }

    /// Check that `args` holds exactly one number and return it
    pub fn unary_integer(name: &str, args: &[MelodyValue]) -> MelodyResult<Number> {
        if args.len() != 1 {
            return Err(MelodyError::WrongArity {
                name: name.to_string(),
                expected: 1,
                received: args.len(),
            });
        }

        args[0].as_integer().ok_or_else(|| {
            MelodyError::WrongValue(format!(
                "'{name}' expected a number but received {}.",
                args[0].kind()
            ))
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn lists_render_like_sequences() {
            let list = MelodyValue::List((0..5).map(MelodyValue::from).collect());
            assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]");
            assert_eq!(MelodyValue::List(Vec::new()).to_string(), "[]");
        }

        #[test]
        fn kinds_render_as_type_names() {
            assert_eq!(MelodyValue::Number(1).kind().to_string(), "<type 'number'>");
            assert_eq!(MelodyValue::List(Vec::new()).kind().to_string(), "<type 'list'>");
            assert_eq!(ValueKind::Function.to_string(), "<type 'function'>");
        }

        #[derive(Debug)]
        struct Negate;

        impl MelodyFunction for Negate {
            fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
                Ok(MelodyValue::Number(-unary_integer("negate", &args)?))
            }

            fn get_name(&self) -> &str {
                "negate"
            }
        }

        #[test]
        fn values_are_called_directly() {
            let negate = MelodyValue::function(Negate);
            assert_eq!(
                negate.call(vec![MelodyValue::Number(3)]).unwrap(),
                MelodyValue::Number(-3)
            );

            let err = MelodyValue::Number(3).call(Vec::new()).unwrap_err();
            assert!(matches!(err, MelodyError::WrongValue(msg) if msg.contains("number")));

            let err = MelodyValue::List(Vec::new()).call(Vec::new()).unwrap_err();
            assert!(matches!(err, MelodyError::WrongValue(msg) if msg.contains("list")));
        }

        #[test]
        fn unary_integer_checks_arity_and_type() {
            assert_eq!(unary_integer("f", &[MelodyValue::Number(3)]).unwrap(), 3);

            let err = unary_integer("f", &[]).unwrap_err();
            assert!(matches!(
                err,
                MelodyError::WrongArity {
                    expected: 1,
                    received: 0,
                    ..
                }
            ));

            let err = unary_integer("f", &[MelodyValue::List(Vec::new())]).unwrap_err();
            assert!(matches!(err, MelodyError::WrongValue(_)));
        }
    }
}

pub mod functions {
    use std::fmt;

    use crate::runtime::*;

    /// `square(n)`
    #[derive(Debug)]
    pub struct SquareFunc;

    impl MelodyFunction for SquareFunc {
        fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            let n = unary_integer(self.get_name(), &args)?;
            n.checked_mul(n)
                .map(MelodyValue::Number)
                .ok_or_else(|| MelodyError::Overflow(self.get_name().to_string()))
        }

        fn get_name(&self) -> &str {
            "square"
        }
    }

    /// An anonymous function built from a closure. `None` from the body means overflow.
    pub struct Lambda<F> {
        body: F,
    }

    impl<F> Lambda<F>
    where
        F: Fn(Number) -> Option<Number>,
    {
        pub fn new(body: F) -> Self {
            Self { body }
        }
    }

    impl<F> fmt::Debug for Lambda<F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Lambda").finish_non_exhaustive()
        }
    }

    impl<F> MelodyFunction for Lambda<F>
    where
        F: Fn(Number) -> Option<Number>,
    {
        fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            let n = unary_integer(self.get_name(), &args)?;
            (self.body)(n)
                .map(MelodyValue::Number)
                .ok_or_else(|| MelodyError::Overflow(self.get_name().to_string()))
        }

        fn get_name(&self) -> &str {
            "<lambda>"
        }
    }

    /// `range(n)`
    #[derive(Debug)]
    pub struct RangeFunc;

    impl MelodyFunction for RangeFunc {
        fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            let end = unary_integer(self.get_name(), &args)?;
            if end < 0 {
                return Err(MelodyError::WrongValue(format!(
                    "'range' expected a non-negative bound but received {end}."
                )));
            }
            Ok(MelodyValue::List((0..end).map(MelodyValue::Number).collect()))
        }

        fn get_name(&self) -> &str {
            "range"
        }
    }

    /// `map(f, list)`
    #[derive(Debug)]
    pub struct MapFunc;

    impl MelodyFunction for MapFunc {
        fn call(&self, args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            if args.len() != 2 {
                return Err(MelodyError::WrongArity {
                    name: self.get_name().to_string(),
                    expected: 2,
                    received: args.len(),
                });
            }

            let func = args[0].as_function().ok_or_else(|| {
                MelodyError::WrongValue(format!(
                    "'map' expected a function but received {}.",
                    args[0].kind()
                ))
            })?;
            let items = args[1].as_list().ok_or_else(|| {
                MelodyError::WrongValue(format!(
                    "'map' expected a list but received {}.",
                    args[1].kind()
                ))
            })?;

            items
                .iter()
                .map(|item| func.call(vec![item.clone()]))
                .collect::<MelodyResult<Vec<_>>>()
                .map(MelodyValue::List)
        }

        fn get_name(&self) -> &str {
            "map"
        }
    }

}

pub mod scope {
    use std::collections::HashMap;

    pub use slab::Slab;

    use crate::{
        functions::{MapFunc, RangeFunc},
        runtime::*,
    };

    pub type ValueKey = usize;

    /// Name bindings. Values live in a slab, names point into it.
    #[derive(Debug, Default)]
    pub struct Scope {
        values: Slab<MelodyValue>,
        names: HashMap<String, ValueKey>,
    }

    impl Scope {
        /// Builtin functions available in every scope, such as `map()`
        pub fn setup_globals(&mut self) {
            self.add_global_function(RangeFunc);
            self.add_global_function(MapFunc);
        }

        pub fn add_global_function(&mut self, func: impl MelodyFunction + 'static) {
            let name = func.get_name().to_string();
            self.define_variable(name, MelodyValue::function(func));
        }

        /// Bind `value` to `name`, replacing any previous value in place
        pub fn define_variable(&mut self, name: impl AsRef<str>, value: MelodyValue) -> ValueKey {
            if let Some(&key) = self.names.get(name.as_ref()) {
                self.values[key] = value;
                key
            } else {
                let key = self.values.insert(value);
                self.names.insert(name.as_ref().to_string(), key);
                key
            }
        }

        pub fn get_variable(&self, name: impl AsRef<str>) -> MelodyResult<MelodyValue> {
            self.names
                .get(name.as_ref())
                .and_then(|key| self.values.get(*key))
                .cloned()
                .ok_or_else(|| MelodyError::UndefinedVariable(name.as_ref().to_string()))
        }

        /// Call a function given its name and arguments
        pub fn call_function(
            &self,
            name: impl AsRef<str>,
            args: Vec<MelodyValue>,
        ) -> MelodyResult<MelodyValue> {
            let name = name.as_ref();
            self.names
                .get(name)
                .and_then(|key| self.values.get(*key))
                .ok_or_else(|| MelodyError::UndefinedFunction(name.to_string()))?
                .call(args)
        }
    }

}

pub mod melody {
    use std::io::Write;

    use crate::{
        functions::{Lambda, SquareFunc},
        runtime::*,
        scope::Scope,
    };

    /// The number both squaring functions are applied to
    pub const SQUARE_INPUT: Number = 2;

    /// Exclusive upper bound of the sequence that gets mapped
    pub const RANGE_END: Number = 5;

    /// Run the script, writing one line per printed value to `out`
    pub fn run(out: &mut impl Write) -> MelodyResult<()> {
        let mut scope = Scope::default();
        scope.setup_globals();

        scope.add_global_function(SquareFunc);
        let square = scope.get_variable("square")?;
        writeln!(out, "{}", square.call(vec![MelodyValue::Number(SQUARE_INPUT)])?)?;
        writeln!(out, "{}", square.kind())?;

        let square_lambda = MelodyValue::function(Lambda::new(|x: Number| x.checked_mul(x)));
        scope.define_variable("squareLambda", square_lambda.clone());
        writeln!(out, "{}", square_lambda.call(vec![MelodyValue::Number(SQUARE_INPUT)])?)?;
        writeln!(out, "{}", square_lambda.kind())?;

        let list = scope
            .get_variable("range")?
            .call(vec![MelodyValue::Number(RANGE_END)])?;
        scope.define_variable("list", list.clone());
        writeln!(out, "{list}")?;

        let squares = scope.get_variable("map")?.call(vec![square_lambda, list])?;
        writeln!(out, "{squares}")?;

        out.flush()?;
        Ok(())
    }
}

pub mod church {
    use std::{fmt, ops::Not};

    use crate::runtime::*;

    fn first<T>(x: T, _y: T) -> T {
        x
    }

    fn second<T>(_x: T, y: T) -> T {
        y
    }

    /// A boolean that is nothing but a choice between two values.
    ///
    /// Every connective is built from `choose` alone, and the boolean itself is a
    /// function value taking two arguments.
    #[derive(Debug, Clone, Copy)]
    pub struct ChurchBool {
        name: &'static str,
        pick: fn(ChurchBool, ChurchBool) -> ChurchBool,
        pick_value: fn(MelodyValue, MelodyValue) -> MelodyValue,
    }

    pub const TRUE: ChurchBool = ChurchBool {
        name: "true",
        pick: first,
        pick_value: first,
    };

    pub const FALSE: ChurchBool = ChurchBool {
        name: "false",
        pick: second,
        pick_value: second,
    };

    impl ChurchBool {
        pub fn choose(&self, x: MelodyValue, y: MelodyValue) -> MelodyValue {
            (self.pick_value)(x, y)
        }

        fn select(&self, x: ChurchBool, y: ChurchBool) -> ChurchBool {
            (self.pick)(x, y)
        }

        pub fn and(self, other: ChurchBool) -> ChurchBool {
            self.select(other.select(TRUE, FALSE), FALSE)
        }

        pub fn or(self, other: ChurchBool) -> ChurchBool {
            self.select(TRUE, other.select(TRUE, FALSE))
        }

        pub fn xor(self, other: ChurchBool) -> ChurchBool {
            self.select(other.select(FALSE, TRUE), other.select(TRUE, FALSE))
        }
    }

    impl Not for ChurchBool {
        type Output = ChurchBool;

        fn not(self) -> ChurchBool {
            self.select(FALSE, TRUE)
        }
    }

    impl From<bool> for ChurchBool {
        fn from(value: bool) -> Self {
            if value {
                TRUE
            } else {
                FALSE
            }
        }
    }

    impl PartialEq for ChurchBool {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl Eq for ChurchBool {}

    impl fmt::Display for ChurchBool {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    impl MelodyFunction for ChurchBool {
        fn call(&self, mut args: Vec<MelodyValue>) -> MelodyResult<MelodyValue> {
            if args.len() != 2 {
                return Err(MelodyError::WrongArity {
                    name: self.name.to_string(),
                    expected: 2,
                    received: args.len(),
                });
            }
            let y = args.remove(1);
            let x = args.remove(0);
            Ok(self.choose(x, y))
        }

        fn get_name(&self) -> &str {
            self.name
        }
    }

}

pub mod stream {
    use std::{fmt, rc::Rc};

    use once_cell::unsync::Lazy;

    type Thunk<T> = Box<dyn FnOnce() -> Stream<T>>;

    struct Cons<T> {
        head: T,
        tail: Lazy<Stream<T>, Thunk<T>>,
    }

    /// A possibly infinite sequence whose tail is only computed when first reached
    pub struct Stream<T> {
        cell: Option<Rc<Cons<T>>>,
    }

    impl<T> Clone for Stream<T> {
        fn clone(&self) -> Self {
            Self {
                cell: self.cell.clone(),
            }
        }
    }

    impl<T: Clone + 'static> Stream<T> {
        pub fn empty() -> Self {
            Self { cell: None }
        }

        pub fn cons(head: T, tail: impl FnOnce() -> Stream<T> + 'static) -> Self {
            let tail: Thunk<T> = Box::new(tail);
            Self {
                cell: Some(Rc::new(Cons {
                    head,
                    tail: Lazy::new(tail),
                })),
            }
        }

        pub fn of(items: impl IntoIterator<Item = T>) -> Self {
            let items = items.into_iter().collect::<Vec<T>>();
            items
                .into_iter()
                .rev()
                .fold(Self::empty(), |stream, item| stream.prepend(item))
        }

        /// Endless stream of whatever `f` produces on each step
        pub fn generate(f: impl Fn() -> T + 'static) -> Self {
            Self::generate_with(Rc::new(f))
        }

        fn generate_with(f: Rc<dyn Fn() -> T>) -> Self {
            let head = f();
            Self::cons(head, move || Self::generate_with(f))
        }

        /// `initial`, `f(initial)`, `f(f(initial))`, ...
        pub fn iterate(initial: T, f: impl Fn(&T) -> T + 'static) -> Self {
            Self::iterate_with(initial, Rc::new(f))
        }

        fn iterate_with(initial: T, f: Rc<dyn Fn(&T) -> T>) -> Self {
            Self::cons(initial.clone(), move || {
                let next = f(&initial);
                Self::iterate_with(next, f)
            })
        }

        pub fn is_empty(&self) -> bool {
            self.cell.is_none()
        }

        pub fn head(&self) -> Option<&T> {
            self.cell.as_ref().map(|cell| &cell.head)
        }

        pub fn tail(&self) -> Option<Stream<T>> {
            self.cell.as_ref().map(|cell| Lazy::force(&cell.tail).clone())
        }

        pub fn prepend(self, element: T) -> Self {
            Self::cons(element, move || self)
        }

        pub fn append(self, element: T) -> Self {
            self.concat(Self::of([element]))
        }

        pub fn concat(self, other: Stream<T>) -> Self {
            match self.cell {
                None => other,
                Some(cell) => {
                    let head = cell.head.clone();
                    Self::cons(head, move || Lazy::force(&cell.tail).clone().concat(other))
                }
            }
        }

        pub fn map<R: Clone + 'static>(&self, f: impl Fn(&T) -> R + 'static) -> Stream<R> {
            self.map_with(Rc::new(f))
        }

        fn map_with<R: Clone + 'static>(&self, f: Rc<dyn Fn(&T) -> R>) -> Stream<R> {
            match &self.cell {
                None => Stream::empty(),
                Some(cell) => {
                    let head = f(&cell.head);
                    let cell = Rc::clone(cell);
                    Stream::cons(head, move || Lazy::force(&cell.tail).map_with(f))
                }
            }
        }

        /// Keeps the elements matching `pred`. Walks forward until the first match.
        pub fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> Self {
            self.filter_with(Rc::new(pred))
        }

        fn filter_with(&self, pred: Rc<dyn Fn(&T) -> bool>) -> Self {
            let mut current = self.clone();
            while let Some(cell) = current.cell {
                if pred(&cell.head) {
                    let head = cell.head.clone();
                    return Self::cons(head, move || Lazy::force(&cell.tail).filter_with(pred));
                }
                current = Lazy::force(&cell.tail).clone();
            }
            Self::empty()
        }

        pub fn take(&self, n: usize) -> Self {
            match &self.cell {
                Some(cell) if n > 0 => {
                    let head = cell.head.clone();
                    let cell = Rc::clone(cell);
                    Self::cons(head, move || match n {
                        1 => Self::empty(),
                        _ => Lazy::force(&cell.tail).take(n - 1),
                    })
                }
                _ => Self::empty(),
            }
        }

        pub fn skip(&self, n: usize) -> Self {
            let mut current = self.clone();
            for _ in 0..n {
                match current.tail() {
                    Some(tail) => current = tail,
                    None => break,
                }
            }
            current
        }

        pub fn for_each(&self, mut f: impl FnMut(&T)) {
            let mut current = self.clone();
            while let Some(cell) = current.cell {
                f(&cell.head);
                current = Lazy::force(&cell.tail).clone();
            }
        }

        pub fn iter(&self) -> Iter<T> {
            Iter {
                current: self.clone(),
            }
        }
    }

    impl<T: fmt::Display> fmt::Display for Stream<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.cell {
                None => write!(f, "Empty"),
                Some(cell) => write!(f, "Stream({}, ?)", cell.head),
            }
        }
    }

    pub struct Iter<T> {
        current: Stream<T>,
    }

    impl<T: Clone + 'static> Iterator for Iter<T> {
        type Item = T;

        fn next(&mut self) -> Option<T> {
            let cell = self.current.cell.clone()?;
            self.current = Lazy::force(&cell.tail).clone();
            Some(cell.head.clone())
        }
    }

}

pub mod sequencing {
    /// `f` first, then `g`
    pub fn and_then<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
        move |x| g(f(x))
    }

    /// `f` applied to the result of `g`
    pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
        move |x| f(g(x))
    }

    pub fn split(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    pub fn capitalize(words: Vec<String>) -> Vec<String> {
        words.into_iter().map(|word| word.to_uppercase()).collect()
    }

    pub fn short_words(words: Vec<String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|word| word.chars().count() <= 3)
            .collect()
    }

    pub fn join(words: Vec<String>) -> String {
        words.join(" ")
    }

    /// Upper-cased words of at most three characters, in one iterator chain
    pub fn shout_short_words(sentence: &str) -> String {
        sentence
            .split_whitespace()
            .map(str::to_uppercase)
            .filter(|word| word.chars().count() <= 3)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const SENTENCE: &str = "all mimsy were the borogoves";

        #[test]
        fn chained_and_composed_pipelines_agree() {
            let chained = and_then(and_then(and_then(split, capitalize), short_words), join);
            let composed = compose(compose(compose(join, short_words), capitalize), split);

            assert_eq!(shout_short_words(SENTENCE), "ALL WERE THE");
            assert_eq!(chained(SENTENCE), "ALL WERE THE");
            assert_eq!(composed(SENTENCE), "ALL WERE THE");
        }

        #[test]
        fn and_then_runs_left_to_right() {
            let add1 = |x: i64| x + 1;
            let double = |x: i64| x * 2;
            assert_eq!(and_then(add1, double)(2), 6);
            assert_eq!(compose(add1, double)(2), 5);
        }
    }
}

pub mod sets {
    use std::rc::Rc;

    /// A set known only by its membership test
    pub struct Set<T> {
        contains: Rc<dyn Fn(&T) -> bool>,
    }

    impl<T> Clone for Set<T> {
        fn clone(&self) -> Self {
            Self {
                contains: Rc::clone(&self.contains),
            }
        }
    }

    impl<T: 'static> Set<T> {
        pub fn from_predicate(pred: impl Fn(&T) -> bool + 'static) -> Self {
            Self {
                contains: Rc::new(pred),
            }
        }

        pub fn singleton(element: T) -> Self
        where
            T: PartialEq,
        {
            Self::from_predicate(move |item| *item == element)
        }

        pub fn contains(&self, item: &T) -> bool {
            (self.contains)(item)
        }

        pub fn union(&self, other: &Set<T>) -> Self {
            let (a, b) = (self.clone(), other.clone());
            Self::from_predicate(move |item| a.contains(item) || b.contains(item))
        }

        /// Elements of `self` that are not in `other`
        pub fn difference(&self, other: &Set<T>) -> Self {
            let (a, b) = (self.clone(), other.clone());
            Self::from_predicate(move |item| a.contains(item) && !b.contains(item))
        }

        pub fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> Self {
            let set = self.clone();
            Self::from_predicate(move |item| set.contains(item) && pred(item))
        }
    }

}

pub mod recursion {
    use crate::runtime::Number;

    /// Sum with an accumulator that is updated in place. `None` on overflow.
    pub fn sum_iter(nums: &[Number]) -> Option<Number> {
        let mut acc: Number = 0;
        for num in nums {
            acc = acc.checked_add(*num)?;
        }
        Some(acc)
    }

    /// Sum without any variable: the pending additions live on the call stack
    pub fn sum_rec(nums: &[Number]) -> Option<Number> {
        match nums {
            [] => Some(0),
            [first, rest @ ..] => first.checked_add(sum_rec(rest)?),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn both_sums_agree() {
            let cases: [&[Number]; 3] = [&[], &[2, 3, 5], &[-4, 4, 10, -1]];
            for nums in cases {
                assert_eq!(sum_iter(nums), sum_rec(nums));
            }
            assert_eq!(sum_rec(&[2, 3, 5]), Some(10));
            assert_eq!(sum_iter(&[]), Some(0));
        }

        #[test]
        fn overflow_is_reported() {
            assert_eq!(sum_iter(&[Number::MAX, 1]), None);
            assert_eq!(sum_rec(&[1, Number::MAX]), None);
        }
    }
}

pub use melody::run;
