// automatically generated by the FlatBuffers compiler, do not modify
// source: schemas/record.fbs

// @generated

#![allow(unused_imports, dead_code, clippy::all)]

pub mod bench {

use flatbuffers::{EndianScalar, Follow};

pub enum RecordOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Record<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Record<'a> {
  type Inner = Record<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Record<'a> {
  pub const VT_FOO: flatbuffers::VOffsetT = 4;
  pub const VT_FOO_NUMBER: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Record { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args RecordArgs<'args>
  ) -> flatbuffers::WIPOffset<Record<'bldr>> {
    let mut builder = RecordBuilder::new(_fbb);
    builder.add_foo_number(args.foo_number);
    if let Some(x) = args.foo { builder.add_foo(x); }
    builder.finish()
  }


  #[inline]
  pub fn foo(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Record::VT_FOO, None)}
  }
  #[inline]
  pub fn foo_number(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(Record::VT_FOO_NUMBER, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for Record<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("foo", Self::VT_FOO, false)?
     .visit_field::<i32>("foo_number", Self::VT_FOO_NUMBER, false)?
     .finish();
    Ok(())
  }
}
pub struct RecordArgs<'a> {
    pub foo: Option<flatbuffers::WIPOffset<&'a str>>,
    pub foo_number: i32,
}
impl<'a> Default for RecordArgs<'a> {
  #[inline]
  fn default() -> Self {
    RecordArgs {
      foo: None,
      foo_number: 0,
    }
  }
}

pub struct RecordBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> RecordBuilder<'a, 'b> {
  #[inline]
  pub fn add_foo(&mut self, foo: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Record::VT_FOO, foo);
  }
  #[inline]
  pub fn add_foo_number(&mut self, foo_number: i32) {
    self.fbb_.push_slot::<i32>(Record::VT_FOO_NUMBER, foo_number, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> RecordBuilder<'a, 'b> {
    let start = _fbb.start_table();
    RecordBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Record<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

pub enum FriendOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Friend<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Friend<'a> {
  type Inner = Friend<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Friend<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_NAME: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Friend { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args FriendArgs<'args>
  ) -> flatbuffers::WIPOffset<Friend<'bldr>> {
    let mut builder = FriendBuilder::new(_fbb);
    if let Some(x) = args.name { builder.add_name(x); }
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(Friend::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn name(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Friend::VT_NAME, None)}
  }
}

impl flatbuffers::Verifiable for Friend<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    v.visit_table(pos)?
     .visit_field::<u32>("id", Self::VT_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
     .finish();
    Ok(())
  }
}
pub struct FriendArgs<'a> {
    pub id: u32,
    pub name: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for FriendArgs<'a> {
  #[inline]
  fn default() -> Self {
    FriendArgs {
      id: 0,
      name: None,
    }
  }
}

pub struct FriendBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> FriendBuilder<'a, 'b> {
  #[inline]
  pub fn add_id(&mut self, id: u32) {
    self.fbb_.push_slot::<u32>(Friend::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_name(&mut self, name: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Friend::VT_NAME, name);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> FriendBuilder<'a, 'b> {
    let start = _fbb.start_table();
    FriendBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Friend<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

pub enum PersonOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Person<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Person<'a> {
  type Inner = Person<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Person<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_GUID: flatbuffers::VOffsetT = 6;
  pub const VT_IS_ACTIVE: flatbuffers::VOffsetT = 8;
  pub const VT_BALANCE: flatbuffers::VOffsetT = 10;
  pub const VT_AGE: flatbuffers::VOffsetT = 12;
  pub const VT_NAME: flatbuffers::VOffsetT = 14;
  pub const VT_EMAIL: flatbuffers::VOffsetT = 16;
  pub const VT_COMPANY: flatbuffers::VOffsetT = 18;
  pub const VT_LATITUDE: flatbuffers::VOffsetT = 20;
  pub const VT_LONGITUDE: flatbuffers::VOffsetT = 22;
  pub const VT_TAGS: flatbuffers::VOffsetT = 24;
  pub const VT_FRIENDS: flatbuffers::VOffsetT = 26;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Person { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args PersonArgs<'args>
  ) -> flatbuffers::WIPOffset<Person<'bldr>> {
    let mut builder = PersonBuilder::new(_fbb);
    builder.add_longitude(args.longitude);
    builder.add_latitude(args.latitude);
    builder.add_balance(args.balance);
    if let Some(x) = args.friends { builder.add_friends(x); }
    if let Some(x) = args.tags { builder.add_tags(x); }
    if let Some(x) = args.company { builder.add_company(x); }
    if let Some(x) = args.email { builder.add_email(x); }
    if let Some(x) = args.name { builder.add_name(x); }
    builder.add_age(args.age);
    if let Some(x) = args.guid { builder.add_guid(x); }
    builder.add_id(args.id);
    builder.add_is_active(args.is_active);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(Person::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn guid(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Person::VT_GUID, None)}
  }
  #[inline]
  pub fn is_active(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(Person::VT_IS_ACTIVE, Some(false)).unwrap()}
  }
  #[inline]
  pub fn balance(&self) -> f64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f64>(Person::VT_BALANCE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn age(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(Person::VT_AGE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn name(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Person::VT_NAME, None)}
  }
  #[inline]
  pub fn email(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Person::VT_EMAIL, None)}
  }
  #[inline]
  pub fn company(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Person::VT_COMPANY, None)}
  }
  #[inline]
  pub fn latitude(&self) -> f64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f64>(Person::VT_LATITUDE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn longitude(&self) -> f64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<f64>(Person::VT_LONGITUDE, Some(0.0)).unwrap()}
  }
  #[inline]
  pub fn tags(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(Person::VT_TAGS, None)}
  }
  #[inline]
  pub fn friends(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Friend<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Friend>>>>(Person::VT_FRIENDS, None)}
  }
}

impl flatbuffers::Verifiable for Person<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    v.visit_table(pos)?
     .visit_field::<u32>("id", Self::VT_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("guid", Self::VT_GUID, false)?
     .visit_field::<bool>("is_active", Self::VT_IS_ACTIVE, false)?
     .visit_field::<f64>("balance", Self::VT_BALANCE, false)?
     .visit_field::<u32>("age", Self::VT_AGE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("email", Self::VT_EMAIL, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("company", Self::VT_COMPANY, false)?
     .visit_field::<f64>("latitude", Self::VT_LATITUDE, false)?
     .visit_field::<f64>("longitude", Self::VT_LONGITUDE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("tags", Self::VT_TAGS, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Friend>>>>("friends", Self::VT_FRIENDS, false)?
     .finish();
    Ok(())
  }
}
pub struct PersonArgs<'a> {
    pub id: u32,
    pub guid: Option<flatbuffers::WIPOffset<&'a str>>,
    pub is_active: bool,
    pub balance: f64,
    pub age: u32,
    pub name: Option<flatbuffers::WIPOffset<&'a str>>,
    pub email: Option<flatbuffers::WIPOffset<&'a str>>,
    pub company: Option<flatbuffers::WIPOffset<&'a str>>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
    pub friends: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Friend<'a>>>>>,
}
impl<'a> Default for PersonArgs<'a> {
  #[inline]
  fn default() -> Self {
    PersonArgs {
      id: 0,
      guid: None,
      is_active: false,
      balance: 0.0,
      age: 0,
      name: None,
      email: None,
      company: None,
      latitude: 0.0,
      longitude: 0.0,
      tags: None,
      friends: None,
    }
  }
}

pub struct PersonBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> PersonBuilder<'a, 'b> {
  #[inline]
  pub fn add_id(&mut self, id: u32) {
    self.fbb_.push_slot::<u32>(Person::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_guid(&mut self, guid: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_GUID, guid);
  }
  #[inline]
  pub fn add_is_active(&mut self, is_active: bool) {
    self.fbb_.push_slot::<bool>(Person::VT_IS_ACTIVE, is_active, false);
  }
  #[inline]
  pub fn add_balance(&mut self, balance: f64) {
    self.fbb_.push_slot::<f64>(Person::VT_BALANCE, balance, 0.0);
  }
  #[inline]
  pub fn add_age(&mut self, age: u32) {
    self.fbb_.push_slot::<u32>(Person::VT_AGE, age, 0);
  }
  #[inline]
  pub fn add_name(&mut self, name: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_NAME, name);
  }
  #[inline]
  pub fn add_email(&mut self, email: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_EMAIL, email);
  }
  #[inline]
  pub fn add_company(&mut self, company: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_COMPANY, company);
  }
  #[inline]
  pub fn add_latitude(&mut self, latitude: f64) {
    self.fbb_.push_slot::<f64>(Person::VT_LATITUDE, latitude, 0.0);
  }
  #[inline]
  pub fn add_longitude(&mut self, longitude: f64) {
    self.fbb_.push_slot::<f64>(Person::VT_LONGITUDE, longitude, 0.0);
  }
  #[inline]
  pub fn add_tags(&mut self, tags: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_TAGS, tags);
  }
  #[inline]
  pub fn add_friends(&mut self, friends: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<Friend<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Person::VT_FRIENDS, friends);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> PersonBuilder<'a, 'b> {
    let start = _fbb.start_table();
    PersonBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Person<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

pub enum DatasetOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Dataset<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Dataset<'a> {
  type Inner = Dataset<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: flatbuffers::Table::new(buf, loc) }
  }
}

impl<'a> Dataset<'a> {
  pub const VT_PEOPLE: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Dataset { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr>,
    args: &'args DatasetArgs<'args>
  ) -> flatbuffers::WIPOffset<Dataset<'bldr>> {
    let mut builder = DatasetBuilder::new(_fbb);
    if let Some(x) = args.people { builder.add_people(x); }
    builder.finish()
  }


  #[inline]
  pub fn people(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Person<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Person>>>>(Dataset::VT_PEOPLE, None)}
  }
}

impl flatbuffers::Verifiable for Dataset<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<Person>>>>("people", Self::VT_PEOPLE, false)?
     .finish();
    Ok(())
  }
}
pub struct DatasetArgs<'a> {
    pub people: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<Person<'a>>>>>,
}
impl<'a> Default for DatasetArgs<'a> {
  #[inline]
  fn default() -> Self {
    DatasetArgs {
      people: None,
    }
  }
}

pub struct DatasetBuilder<'a: 'b, 'b> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b> DatasetBuilder<'a, 'b> {
  #[inline]
  pub fn add_people(&mut self, people: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<Person<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Dataset::VT_PEOPLE, people);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>) -> DatasetBuilder<'a, 'b> {
    let start = _fbb.start_table();
    DatasetBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Dataset<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

#[inline]
/// Verifies that a buffer of bytes contains a `Record`
/// and returns it.
pub fn root_as_record(buf: &[u8]) -> Result<Record, flatbuffers::InvalidFlatbuffer> {
  flatbuffers::root::<Record>(buf)
}
#[inline]
pub fn finish_record_buffer<'a, 'b>(
    fbb: &'b mut flatbuffers::FlatBufferBuilder<'a>,
    root: flatbuffers::WIPOffset<Record<'a>>) {
  fbb.finish(root, None);
}
}  // pub mod bench
