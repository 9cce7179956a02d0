use beckon::{InsertError, Router};

struct InsertTest(Vec<(&'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        let mut router = Router::new("app");
        for (route, expected) in self.0 {
            let got = router.insert(route);
            assert_eq!(got, expected, "{route}");
        }
    }
}

#[test]
fn empty_route() {
    InsertTest(vec![("", Err(InsertError::Empty)), ("login", Ok(()))]).run()
}

#[test]
fn unnamed_param() {
    InsertTest(vec![
        ("{}", Err(InsertError::UnnamedParam)),
        ("user:{}", Err(InsertError::UnnamedParam)),
        ("{}:user", Err(InsertError::UnnamedParam)),
        ("user:{}:list", Err(InsertError::UnnamedParam)),
    ])
    .run()
}

#[test]
fn stray_braces_are_literals() {
    // not wrapped in both braces, so these are plain literal segments
    InsertTest(vec![
        ("{user", Ok(())),
        ("user}", Ok(())),
        ("user:{id", Ok(())),
        ("user:id}", Ok(())),
    ])
    .run()
}

#[test]
fn duplicates_allowed() {
    // a duplicate registration is redundant but not an error; the earlier
    // copy wins every tie by registration order
    InsertTest(vec![
        ("profile:{user}", Ok(())),
        ("profile:{user}", Ok(())),
        ("login", Ok(())),
        ("login", Ok(())),
    ])
    .run()
}

#[test]
fn empty_segments_allowed() {
    // `a::b` is a three segment route with an empty literal in the middle
    InsertTest(vec![("a::b", Ok(())), (":", Ok(()))]).run()
}
