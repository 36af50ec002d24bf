use {
    executor::Session,
    storage::DataDir,
    tempfile::{tempdir, TempDir},
};

fn session() -> (TempDir, Session) {
    let dir = tempdir().unwrap();
    let session = Session::new(DataDir::new(dir.path()));
    (dir, session)
}

fn run(session: &mut Session, commands: &[&str]) {
    for command in commands {
        let response = session.execute(command);
        assert!(response.starts_with("[OK]"), "{} => {}", command, response);
    }
}

fn marks(session: &mut Session) {
    run(
        session,
        &[
            "CREATE DATABASE markbook;",
            "USE markbook;",
            "CREATE TABLE marks (name, mark, pass);",
            "INSERT INTO marks VALUES ('Simon', 65, TRUE);",
            "INSERT INTO marks VALUES ('Sion', 55, TRUE);",
            "INSERT INTO marks VALUES ('Rob', 35, FALSE);",
            "INSERT INTO marks VALUES ('Dorris', 20, FALSE);",
            "INSERT INTO marks VALUES ('Chris', 20, FALSE);",
        ],
    );
}

#[test]
fn create_insert_select() {
    let (_dir, mut session) = session();

    assert_eq!(session.execute("CREATE DATABASE db;"), "[OK] Database db created");
    assert_eq!(session.execute("USE db;"), "[OK] Switched to database db");
    assert_eq!(session.current_database(), Some("db"));
    assert_eq!(session.execute("CREATE TABLE t (c1,c2);"), "[OK] Table t created");
    assert_eq!(
        session.execute("INSERT INTO t VALUES ('a',1);"),
        "[OK] Record inserted into t"
    );
    assert_eq!(session.execute("SELECT * FROM t;"), "[OK]\nid\tc1\tc2\n1\ta\t1");
    assert_eq!(session.execute("select c2, C1 from T;"), "[OK]\nc2\tc1\n1\ta");
}

#[test]
fn update_scenario() {
    let (_dir, mut session) = session();
    marks(&mut session);

    assert_eq!(
        session.execute("UPDATE marks SET mark = 70 WHERE name == 'Simon';"),
        "[OK] 1 record(s) updated in marks"
    );
    let response = session.execute("SELECT * FROM marks;");
    let lines: Vec<_> = response.lines().collect();
    assert_eq!(lines[0], "[OK]");
    assert_eq!(lines[1], "id\tname\tmark\tpass");
    assert_eq!(lines[2], "1\tSimon\t70\tTRUE");
    assert_eq!(lines.len(), 7);
}

#[test]
fn update_never_changes_id() {
    let (_dir, mut session) = session();
    marks(&mut session);

    assert!(session
        .execute("UPDATE marks SET id=9 WHERE id==1;")
        .starts_with("[ERROR]"));

    let before = session.execute("SELECT * FROM marks;");
    for command in [
        "UPDATE marks SET x=5 WHERE id==1;",
        "UPDATE marks SET mark=0, x=5 WHERE id==1;",
        "UPDATE marks SET x=5 WHERE id==99;",
    ] {
        assert_eq!(
            session.execute(command),
            r#"[ERROR] column "x" does not exist"#,
            "{}",
            command
        );
    }
    assert_eq!(session.execute("SELECT * FROM marks;"), before);
}

#[test]
fn delete_preserves_order() {
    let (_dir, mut session) = session();
    marks(&mut session);

    assert_eq!(
        session.execute("DELETE FROM marks WHERE mark < 30;"),
        "[OK] 2 record(s) deleted from marks"
    );
    assert_eq!(
        session.execute("SELECT id, name FROM marks;"),
        "[OK]\nid\tname\n1\tSimon\n2\tSion\n3\tRob"
    );
    assert_eq!(
        session.execute("DELETE FROM marks WHERE mark < 30;"),
        "[OK] 0 record(s) deleted from marks"
    );
}

#[test]
fn where_clauses() {
    let (_dir, mut session) = session();
    marks(&mut session);

    assert_eq!(
        session.execute("SELECT name FROM marks WHERE name LIKE 'si';"),
        "[OK]\nname\nSimon\nSion"
    );
    assert_eq!(
        session.execute("SELECT name FROM marks WHERE (mark >= 55);"),
        "[OK]\nname\nSimon\nSion"
    );
    assert_eq!(
        session.execute("SELECT name FROM marks WHERE pass != TRUE;"),
        "[OK]\nname\nRob\nDorris\nChris"
    );
    assert_eq!(
        session.execute("SELECT name FROM marks WHERE name > 'A';"),
        "[OK]\nname"
    );
    assert_eq!(
        session.execute("SELECT * FROM marks WHERE age == 1;"),
        r#"[ERROR] column "age" in WHERE clause does not exist"#
    );
    assert_eq!(
        session.execute("SELECT name, age FROM marks;"),
        r#"[ERROR] column "age" does not exist"#
    );
    assert_eq!(
        session.execute("SELECT * FROM marks WHERE mark ~ 3;"),
        "[ERROR] invalid WHERE condition: mark ~ 3"
    );
}

#[test]
fn alter_round_trip() {
    let (_dir, mut session) = session();
    marks(&mut session);
    let before = session.execute("SELECT * FROM marks;");

    assert_eq!(
        session.execute("ALTER TABLE marks ADD grade;"),
        "[OK] Column grade added to marks"
    );
    assert_eq!(
        session.execute("SELECT id, grade FROM marks WHERE id == 1;"),
        "[OK]\nid\tgrade\n1\t"
    );
    assert_eq!(
        session.execute("ALTER TABLE marks DROP grade;"),
        "[OK] Column grade dropped from marks"
    );
    assert_eq!(session.execute("SELECT * FROM marks;"), before);

    assert!(session.execute("ALTER TABLE marks ADD name;").starts_with("[ERROR]"));
    assert!(session.execute("ALTER TABLE marks DROP id;").starts_with("[ERROR]"));
    assert!(session.execute("ALTER TABLE marks DROP age;").starts_with("[ERROR]"));
}

#[test]
fn persistence() {
    let (dir, mut session) = session();
    marks(&mut session);
    run(
        &mut session,
        &["INSERT INTO marks VALUES ('Bob Smith', 42.5, NULL);"],
    );
    let before = session.execute("SELECT * FROM marks;");

    let mut reopened = Session::new(DataDir::new(dir.path()));
    assert_eq!(
        reopened.execute("SELECT * FROM marks;"),
        "[ERROR] no database selected, run USE <dbname> first"
    );
    run(&mut reopened, &["USE MarkBook;"]);
    assert_eq!(reopened.execute("SELECT * FROM marks;"), before);

    // the next id continues after the reloaded rows
    run(&mut reopened, &["INSERT INTO marks VALUES ('Eve', 1, TRUE);"]);
    assert!(reopened
        .execute("SELECT * FROM marks WHERE name == Eve;")
        .ends_with("\n7\tEve\t1\tTRUE"));
}

#[test]
fn reload_keeps_cells_as_written() {
    let (dir, mut session) = session();
    run(
        &mut session,
        &[
            "CREATE DATABASE db;",
            "USE db;",
            "CREATE TABLE t (zip, flag, nothing, big, small, price);",
            "INSERT INTO t VALUES ('007', 'true', 'NULL', 99999999999999999999, 0.00001, 2.50);",
        ],
    );

    let expected = "[OK]\nid\tzip\tflag\tnothing\tbig\tsmall\tprice\n\
                    1\t007\ttrue\tNULL\t99999999999999999999\t0.00001\t2.50";
    let matching = "[OK]\nzip\n007";
    assert_eq!(session.execute("SELECT * FROM t;"), expected);
    assert_eq!(
        session.execute("SELECT zip FROM t WHERE flag == 'true';"),
        matching
    );

    let mut reopened = Session::new(DataDir::new(dir.path()));
    run(&mut reopened, &["USE db;"]);
    assert_eq!(reopened.execute("SELECT * FROM t;"), expected);
    assert_eq!(
        reopened.execute("SELECT zip FROM t WHERE flag == 'true';"),
        matching
    );
    assert_eq!(
        reopened.execute("SELECT zip FROM t WHERE nothing == 'NULL';"),
        matching
    );
    // numeric readings survive as well
    assert_eq!(reopened.execute("SELECT zip FROM t WHERE zip == 7;"), matching);
    assert_eq!(
        reopened.execute("SELECT zip FROM t WHERE price < 3;"),
        matching
    );
}

#[test]
fn join_compares_cells_as_written() {
    let (_dir, mut session) = session();
    run(
        &mut session,
        &[
            "CREATE DATABASE db;",
            "USE db;",
            "CREATE TABLE a (v);",
            "CREATE TABLE b (w);",
            "INSERT INTO a VALUES (007);",
            "INSERT INTO a VALUES (2.50);",
            "INSERT INTO b VALUES (7);",
            "INSERT INTO b VALUES (2.5);",
        ],
    );

    assert_eq!(
        session.execute("JOIN a AND b ON v AND w;"),
        "[OK]\nid\ta.v\tb.w"
    );
    assert_eq!(
        session.execute("SELECT v FROM a WHERE v == 7;"),
        "[OK]\nv\n007"
    );
}

#[test]
fn join_scenario() {
    let (_dir, mut session) = session();
    run(
        &mut session,
        &[
            "CREATE DATABASE people;",
            "USE people;",
            "CREATE TABLE table1 (name, score);",
            "CREATE TABLE table2 (name, age);",
            "INSERT INTO table1 VALUES ('Alice', 90);",
            "INSERT INTO table1 VALUES ('Bob', 85);",
            "INSERT INTO table2 VALUES ('Bob', 30);",
            "INSERT INTO table2 VALUES ('Alice', 25);",
        ],
    );

    let response = session.execute("JOIN table1 AND table2 ON name AND name;");
    assert_eq!(
        response,
        "[OK]\nid\ttable1.name\ttable1.score\ttable2.name\ttable2.age\n\
         1\tAlice\t90\tAlice\t25\n\
         2\tBob\t85\tBob\t30"
    );

    assert_eq!(
        session.execute("JOIN table1 AND table2 ON name AND age AND id;"),
        "[ERROR] invalid JOIN syntax, expected JOIN <table> AND <table> ON <attribute> AND <attribute>"
    );
    assert_eq!(
        session.execute("JOIN table1 AND table2 ON score AND score;"),
        r#"[ERROR] column "score" does not exist in table "table2""#
    );
}

#[test]
fn drop_statements() {
    let (dir, mut session) = session();
    marks(&mut session);

    assert_eq!(session.execute("DROP TABLE marks;"), "[OK] Table marks dropped");
    assert!(!dir.path().join("markbook").join("marks.tab").exists());
    assert_eq!(
        session.execute("SELECT * FROM marks;"),
        r#"[ERROR] table "marks" does not exist"#
    );

    assert_eq!(
        session.execute("DROP DATABASE markbook;"),
        "[OK] Database markbook dropped"
    );
    assert_eq!(session.current_database(), None);
    assert!(!dir.path().join("markbook").exists());
    assert_eq!(
        session.execute("USE markbook;"),
        r#"[ERROR] database "markbook" does not exist"#
    );
}

#[test]
fn drop_database_needs_a_selection() {
    let (dir, mut session) = session();
    run(
        &mut session,
        &["CREATE DATABASE first;", "CREATE DATABASE second;"],
    );

    assert_eq!(
        session.execute("DROP DATABASE first;"),
        "[ERROR] no database selected, run USE <dbname> first"
    );
    assert!(dir.path().join("first").is_dir());

    run(&mut session, &["USE second;", "DROP DATABASE first;"]);
    assert!(!dir.path().join("first").exists());
    assert_eq!(session.current_database(), Some("second"));

    // a failed drop keeps the selection
    assert_eq!(
        session.execute("DROP DATABASE first;"),
        r#"[ERROR] database "first" does not exist"#
    );
    assert_eq!(session.current_database(), Some("second"));
}

#[test]
fn errors_are_single_lines() {
    let (_dir, mut session) = session();

    let cases = [
        ("", "[ERROR] syntax error: empty command"),
        ("USE db", "[ERROR] syntax error: missing statement terminator ';'"),
        ("GRANT ALL;", "[ERROR] unsupported command: GRANT"),
        ("CREATE TABLE t;", "[ERROR] no database selected, run USE <dbname> first"),
        ("USE nowhere;", r#"[ERROR] database "nowhere" does not exist"#),
    ];
    for (command, expected) in cases {
        assert_eq!(session.execute(command), expected, "{}", command);
    }

    run(&mut session, &["CREATE DATABASE db;", "USE db;", "CREATE TABLE t (a, b);"]);
    let cases = [
        ("CREATE DATABASE db;", r#"[ERROR] database "db" already exists"#),
        ("CREATE TABLE t;", r#"[ERROR] table "t" already exists"#),
        ("CREATE TABLE u (a, A);", r#"[ERROR] duplicate column name "A""#),
        ("CREATE TABLE u (id);", r#"[ERROR] duplicate column name "id""#),
        ("INSERT INTO t VALUES (1);", "[ERROR] expected 2 values but found 1"),
        (
            "INSERT INTO t VALUES (1, bare);",
            "[ERROR] invalid value bare, expected a quoted string, a number, TRUE, FALSE or NULL",
        ),
        ("INSERT INTO t VALUES ('a, 1);", "[ERROR] syntax error: unterminated string literal"),
        ("DELETE FROM t;", "[ERROR] syntax error: DELETE requires a WHERE clause"),
    ];
    for (command, expected) in cases {
        let response = session.execute(command);
        assert_eq!(response, expected, "{}", command);
        assert_eq!(response.lines().count(), 1);
    }
}

#[test]
fn quoted_literals_keep_keywords_and_spaces() {
    let (_dir, mut session) = session();
    run(
        &mut session,
        &[
            "CREATE DATABASE db;",
            "USE db;",
            "CREATE TABLE notes(body);",
            "INSERT INTO notes VALUES ('select  * FROM x WHERE it''s, fine');",
        ],
    );

    assert_eq!(
        session.execute("SELECT body FROM notes WHERE body LIKE 'from x where';"),
        "[OK]\nbody\nselect  * FROM x WHERE it's, fine"
    );
    assert_eq!(
        session.execute("UPDATE notes SET body = 'a = b' WHERE body LIKE 'fine';"),
        "[OK] 1 record(s) updated in notes"
    );
    assert_eq!(session.execute("SELECT * FROM notes;"), "[OK]\nid\tbody\n1\ta = b");
}

#[test]
fn id_only_table() {
    let (_dir, mut session) = session();
    run(
        &mut session,
        &[
            "CREATE DATABASE db;",
            "USE db;",
            "CREATE TABLE ids;",
            "INSERT INTO ids VALUES ();",
            "INSERT INTO ids VALUES ();",
        ],
    );

    assert_eq!(session.execute("SELECT * FROM ids;"), "[OK]\nid\n1\n2");
}
