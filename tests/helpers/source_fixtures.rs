//! Common VHDL source fixtures for tests.

// Package / entity / architecture chain
pub const PKG_P: &str = r#"
package p is
  constant width : natural := 8;
end package p;
"#;

pub const ENTITY_E_USES_P: &str = r#"
library ieee;
use ieee.std_logic_1164.all;
use work.p.all;

entity e is
  port (d : in std_logic_vector(width - 1 downto 0));
end entity e;
"#;

pub const ARCH_OF_E: &str = r#"
architecture rtl of e is
begin
end architecture rtl;
"#;

// Entity with two architectures
pub const ENTITY_ADDER: &str = r#"
entity adder is
  port (a, b : in bit; s : out bit);
end adder;
"#;

pub const ADDER_FAST: &str = r#"
architecture fast of adder is
begin
  s <= a xor b;
end fast;
"#;

pub const ADDER_SLOW: &str = r#"
architecture slow of adder is
begin
  process (a, b)
  begin
    s <= a xor b;
  end process;
end slow;
"#;

pub const TOP_USES_ADDER: &str = r#"
entity top is
end top;

architecture structural of top is
  signal a, b, s : bit;
begin
  u0 : entity work.adder port map (a => a, b => b, s => s);
end structural;
"#;

// Mutually dependent packages
pub const PKG_A_USES_B: &str = r#"
use work.b.all;
package a is
end package;
"#;

pub const PKG_B_USES_A: &str = r#"
use work.a.all;
package b is
end package;
"#;

pub const PKG_WITH_BODY: &str = r#"
package util is
  function inc(x : integer) return integer;
end package util;

package body util is
  function inc(x : integer) return integer is
  begin
    return x + 1;
  end function inc;
end package body util;
"#;

pub const USES_MISSING_PACKAGE: &str = r#"
use work.does_not_exist.all;
entity lonely is
end lonely;
"#;

pub const ONLY_COMMENTS: &str = r#"
-- This file intentionally declares nothing.
"#;

// Packages nested inside architectures
pub const GENERIC_PKG_G: &str = r#"
package g is
  generic (n : natural := 1);
  constant size : natural := n;
end package g;
"#;

pub const TOP_WITH_LOCAL_PACKAGE_INSTANCE: &str = r#"
entity top is
end top;

architecture rtl of top is
  package fx is new work.g generic map (n => 2);
  signal a, b, s : bit;
begin
  u0 : entity work.adder port map (a => a, b => b, s => s);
end architecture rtl;
"#;

pub const ARCH_WITH_LOCAL_PACKAGE: &str = r#"
architecture rtl of e is
  package local is
    constant depth : natural := 2;
  end package local;
begin
  u0 : entity work.adder port map (a => a, b => b, s => s);
end architecture rtl;
"#;
