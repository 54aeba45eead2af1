use assert_cmd::Command;

#[test]
fn evaluates_an_expression_argument() {
    Command::cargo_bin("reckon").unwrap()
                                .arg("2+3*4")
                                .assert()
                                .success()
                                .stdout("14.00\n");
}

#[test]
fn parenthesized_groups_override_precedence() {
    Command::cargo_bin("reckon").unwrap()
                                .arg("(2+3)*4")
                                .assert()
                                .success()
                                .stdout("20.00\n");
}

#[test]
fn division_by_zero_prints_a_sentinel() {
    Command::cargo_bin("reckon").unwrap()
                                .arg("1/0")
                                .assert()
                                .success()
                                .stdout("inf\n");
}

#[test]
fn unterminated_group_maps_to_a_nonzero_status() {
    Command::cargo_bin("reckon").unwrap()
                                .arg("(2+3")
                                .assert()
                                .failure()
                                .stderr("Error at column 1: Expected closing parenthesis ')' but none found.\n");
}

#[test]
fn lone_closing_bracket_reports_expected_term() {
    Command::cargo_bin("reckon").unwrap()
                                .arg(")")
                                .assert()
                                .failure()
                                .stderr("Error at column 1: Expected term or '(' but found RParen.\n");
}
