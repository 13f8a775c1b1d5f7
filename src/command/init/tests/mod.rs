mod transitions_tests;
