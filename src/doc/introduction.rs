/*!
# Introduction to Bitwise

Bitwise has two kinds of statement. An assignment binds a name to the value
of an expression. A `print` writes the value of an expression in binary.

<pre><code>&nbsp;> x = 1100
&nbsp;> print x xor 1010
&nbsp;  110
</code></pre>

Names start with a letter and continue with letters or digits. The words
`and`, `or` and `xor` are reserved, so `and = 1` is a parse error while
`android = 1` is fine. `print` may be written in any case.

Literals are runs of `0` and `1`. Leading zeros are allowed and disappear
when printed: `print 0010` prints `10` and `print 0` prints `0`. There is no
fixed width. Values grow as wide as they need to.

Operators bind from tightest to loosest as `and`, `xor`, `or`. Use
parentheses to group differently.

<pre><code>&nbsp;> print 1 or 0 and 0
&nbsp;  1
&nbsp;> print (1 or 0) and 0
&nbsp;  0
</code></pre>

Reading a name before assigning it stops the program.

<pre><code>&nbsp;> print nothing
&nbsp;  Runtime Error: Variable nothing doesn't exist at line 1 char 14
</code></pre>

Spaces, tabs and newlines may appear between any two tokens and are
otherwise ignored. Statements need no separator.

*/
