/*!

This is the long-form manual for `roll_call` and `rollcall`.

## Input sheets

Each plenary session comes with two roll-call spreadsheets. They are read as
rows of text cells; how the cells are obtained (Excel workbook, CSV export)
does not matter to this library.

### Group sheet

The per-group tallies of every vote. The only part that is read is the
description of each vote, found in the second column:

```text
Номер (12) гласуване проведено на 27-03-2015 10:05 по тема Закон за държавния бюджет
```

It gives the number of the vote in the session (`12`), its kind
(`гласуване`, or `регистрация` for a quorum check), its timestamp in the
`DD-MM-YYYY HH:MM` format and its subject. Rows without a description, such
as titles and tallies, are ignored.

### Individual sheet

One row per member, one column per vote. The header row holds the vote
numbers over the vote columns. The other columns are not labelled
consistently across sessions, so their positions are derived from the
column of vote `1`:

|             | column                   |
|-------------|--------------------------|
| name        | always the second column |
| party       | just before vote `1`     |
| member number | two columns before vote `1` |

For instance:

```text
0,Име,,,ПП,1,2,3
1,АДЛЕН ШУКРИ ШЕВКЕД,,1245.0,ДПС,П,+,-
```

A sheet where vote `1` is in one of the first four columns is rejected.

## Outcomes

| token | outcome      |
|-------|--------------|
| `+`   | `for`        |
| `-`   | `against`    |
| `=`   | `abstain`    |
| `0`   | `no-vote`    |
| `П`   | `present`    |
| `Р`   | `registered` |
| `О`   | `absent`     |

The last three only appear in quorum checks. Any other token is reported as
`unknown: <token>`. A vote that has no column in the individual sheet is
reported as `unknown: ` (empty token).

## Errors

* rows of the group sheet with an unreadable description are skipped
* a group sheet with rows of less than three cells, or with two descriptions
  of the same vote, is rejected
* an individual sheet with a row shorter than its header requires is rejected
* an unreadable member number is replaced by `0`
*/
